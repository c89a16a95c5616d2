//! Wire-shaped status of a game.

use crate::game::Game;
use serde::{Deserialize, Serialize};

/// Status view handed to clients.
///
/// `hits[i][j]` is player `i`'s count on the `j`th catalog target
/// (15, 16, 17, 18, 19, 20, 25), capped at 3. Scores are exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player indices, in order.
    pub players: Vec<usize>,
    /// Score per player.
    pub scores: Vec<u32>,
    /// Capped hit counts per player and target.
    pub hits: Vec<Vec<u32>>,
    /// Whether a winner has been decided.
    pub finished: bool,
    /// Index of the winner, once decided.
    pub winner: Option<usize>,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        let players = game.players();
        Self {
            players: players.iter().map(|p| *p.index()).collect(),
            scores: players.iter().map(|p| *p.score()).collect(),
            hits: players.iter().map(|p| p.display_hits().to_vec()).collect(),
            finished: game.is_finished(),
            winner: game.status().winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let mut game = Game::default();
        game.record_hit(1, 25, 3).unwrap();
        game.record_hit(1, 25, 2).unwrap();

        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["players"], serde_json::json!([0, 1]));
        assert_eq!(json["scores"], serde_json::json!([0, 50]));
        assert_eq!(json["hits"][1], serde_json::json!([0, 0, 0, 0, 0, 0, 3]));
        assert_eq!(json["finished"], false);
        assert!(json["winner"].is_null());
    }
}

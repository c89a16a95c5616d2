//! Status consistency: `Won` exactly when someone meets the win condition.

use super::Invariant;
use crate::game::{Game, GameStatus};
use crate::rules::win::is_winner;

/// A game is won iff its winner has closed everything while holding the top
/// score; an in-progress game has no such player.
pub struct TerminalStatusInvariant;

impl Invariant<Game> for TerminalStatusInvariant {
    fn holds(game: &Game) -> bool {
        let players = game.players();
        match game.status() {
            GameStatus::Won(index) => players
                .get(index)
                .is_some_and(|winner| is_winner(players, winner)),
            GameStatus::InProgress => !players.iter().any(|p| is_winner(players, p)),
        }
    }

    fn description() -> &'static str {
        "Game is finished exactly when a player closed everything while leading"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Target;

    #[test]
    fn test_holds_when_closing_out_ends_game() {
        let mut game = Game::default();
        for target in Target::ALL {
            game.record_hit(0, target.value().into(), 3).unwrap();
            assert!(TerminalStatusInvariant::holds(&game));
        }
        assert_eq!(game.status(), GameStatus::Won(0));
    }
}

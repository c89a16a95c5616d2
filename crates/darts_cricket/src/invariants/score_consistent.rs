//! Score consistency: maintained scores equal a replay of the hit log.

use super::Invariant;
use crate::game::Game;
use crate::rules::recompute_scores;

/// Every player's score equals the score recomputed from the full hit history.
pub struct ScoreConsistentInvariant;

impl Invariant<Game> for ScoreConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let expected = recompute_scores(game.players().len(), game.history());
        game.players()
            .iter()
            .zip(expected)
            .all(|(player, score)| *player.score() == score)
    }

    fn description() -> &'static str {
        "Player scores match a replay of the hit history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Hit;
    use crate::target::Target;

    #[test]
    fn test_holds_through_scoring_and_dead_numbers() {
        let mut game = Game::default();
        for hit in [
            Hit::new(0, Target::Nineteen, 3),
            Hit::new(0, Target::Nineteen, 3),
            Hit::new(1, Target::Nineteen, 3),
            Hit::new(0, Target::Nineteen, 3),
        ] {
            game.apply(hit).unwrap();
            assert!(ScoreConsistentInvariant::holds(&game));
        }
        assert_eq!(*game.player(0).unwrap().score(), 57);
    }
}

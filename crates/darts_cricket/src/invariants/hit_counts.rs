//! Hit-count consistency: running counts are the sum of the hit log.

use super::Invariant;
use crate::game::Game;
use crate::target::Target;

/// Each running count equals the hits logged for that player and target.
/// Counts are never clamped, so this also rules out lost excess hits.
pub struct HitCountsMatchHistoryInvariant;

impl Invariant<Game> for HitCountsMatchHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.players().iter().all(|player| {
            Target::ALL.iter().all(|&target| {
                let logged: u32 = game
                    .history()
                    .iter()
                    .filter(|hit| hit.player == *player.index() && hit.target == target)
                    .map(|hit| hit.count)
                    .sum();
                player.hits_on(target) == logged
            })
        })
    }

    fn description() -> &'static str {
        "Running hit counts equal the sum of logged hits"
    }
}

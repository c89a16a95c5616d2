//! Scoring rule: excess hits score while some opponent is still open.

use crate::action::Hit;
use crate::player::PlayerState;
use crate::target::{CLOSE_THRESHOLD, Target};
use strum::EnumCount;
use tracing::instrument;

/// Whether any player other than `acting` still has `target` open.
///
/// A target with no opponents (single-player state) is never open for scoring.
#[instrument(skip(players))]
pub fn opponent_open(players: &[PlayerState], acting: usize, target: Target) -> bool {
    players
        .iter()
        .any(|p| *p.index() != acting && !p.has_closed(target))
}

/// Points earned by `hit_count` hits on a target worth `value`, starting from
/// a running count of `before`.
///
/// Hits are applied one at a time: an increment scores only when the count
/// after it exceeds the close threshold, so a throw can close a number and
/// score on it in the same call.
#[instrument]
pub fn points_for_hit(before: u32, hit_count: u32, value: u32, opponent_open: bool) -> u32 {
    if !opponent_open {
        return 0;
    }
    let scoring = (1..=hit_count)
        .filter(|i| before + i > CLOSE_THRESHOLD)
        .count() as u32;
    scoring * value
}

/// Recomputes every player's score from scratch by replaying `hits` in order.
///
/// Hits naming a player outside `0..player_count` are skipped.
#[instrument(skip(hits), fields(hits = hits.len()))]
pub fn recompute_scores(player_count: usize, hits: &[Hit]) -> Vec<u32> {
    let mut counts = vec![[0u32; Target::COUNT]; player_count];
    let mut scores = vec![0u32; player_count];

    for hit in hits {
        if hit.player >= player_count {
            continue;
        }
        let slot = hit.target.position();
        let open = counts
            .iter()
            .enumerate()
            .any(|(i, c)| i != hit.player && c[slot] < CLOSE_THRESHOLD);

        for _ in 0..hit.count {
            counts[hit.player][slot] += 1;
            if counts[hit.player][slot] > CLOSE_THRESHOLD && open {
                scores[hit.player] += hit.target.value();
            }
        }
    }

    scores
}

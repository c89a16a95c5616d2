//! Per-player scoring state.

use crate::target::{CLOSE_THRESHOLD, Target};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::EnumCount;

/// Hit counts and score for one participant.
///
/// Counts are running totals and keep growing past the close threshold;
/// the true count decides whether later hits can still score. Use
/// [`PlayerState::display_hits`] for the capped view shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerState {
    /// Stable 0-based identity.
    index: usize,
    /// Running hit count per target, in catalog order.
    hits: [u32; Target::COUNT],
    /// Accumulated score.
    score: u32,
}

impl PlayerState {
    /// Creates a player with no hits and no score.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            hits: [0; Target::COUNT],
            score: 0,
        }
    }

    /// Running hit count on a target.
    pub fn hits_on(&self, target: Target) -> u32 {
        self.hits[target.position()]
    }

    /// Whether this player has closed a target.
    pub fn has_closed(&self, target: Target) -> bool {
        self.hits_on(target) >= CLOSE_THRESHOLD
    }

    /// Whether this player has closed every target.
    pub fn has_closed_all(&self) -> bool {
        Target::ALL.iter().all(|&target| self.has_closed(target))
    }

    /// Hit counts capped at the close threshold, in catalog order.
    pub fn display_hits(&self) -> [u32; Target::COUNT] {
        self.hits.map(|count| count.min(CLOSE_THRESHOLD))
    }

    /// Adds hits and points. Callers validate first; this cannot fail.
    pub(crate) fn apply(&mut self, target: Target, hit_count: u32, points: u32) {
        self.hits[target.position()] += hit_count;
        self.score += points;
    }
}

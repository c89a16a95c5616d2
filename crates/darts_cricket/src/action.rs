//! First-class hit events.
//!
//! A hit is the player's throw result as a domain event: it can be validated
//! on its own, logged, and replayed against a fresh game.

use crate::target::Target;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Most hits a single throw can register on one target.
pub const MAX_HITS_PER_THROW: u32 = 3;

/// One recorded throw: `player` hit `target` `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hit {
    /// Index of the throwing player.
    pub player: usize,
    /// Target that was hit.
    pub target: Target,
    /// Number of hits, 1 to 3.
    pub count: u32,
}

impl Hit {
    /// Creates a new hit event.
    #[instrument]
    pub fn new(player: usize, target: Target, count: u32) -> Self {
        Self {
            player,
            target,
            count,
        }
    }

    /// Returns the throwing player.
    pub fn player(&self) -> usize {
        self.player
    }

    /// Returns the target.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Returns the number of hits.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl std::fmt::Display for Hit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {} -> {} x{}", self.player, self.target, self.count)
    }
}

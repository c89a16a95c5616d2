//! Cricket rules.
//!
//! Pure functions over player state. Rules are separated from the engine so
//! they can be tested and reused by invariant checks without a live game.

pub mod scoring;
pub mod win;

pub use scoring::{opponent_open, points_for_hit, recompute_scores};
pub use win::check_winner;

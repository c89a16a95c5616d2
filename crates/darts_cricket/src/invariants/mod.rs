//! First-class invariants for cricket.
//!
//! Invariants are logical properties that must hold after every accepted hit.
//! The engine checks them in debug builds; tests check them directly.

use crate::game::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

pub mod hit_counts;
pub mod score_consistent;
pub mod terminal_status;

pub use hit_counts::HitCountsMatchHistoryInvariant;
pub use score_consistent::ScoreConsistentInvariant;
pub use terminal_status::TerminalStatusInvariant;

/// All cricket invariants as a composable set.
pub type CricketInvariants = (
    HitCountsMatchHistoryInvariant,
    ScoreConsistentInvariant,
    TerminalStatusInvariant,
);

/// Convenience wrapper for checking a live game.
pub fn check_game(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    CricketInvariants::check_all(game)
}

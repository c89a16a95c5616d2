//! The fixed catalog of cricket targets.

use crate::error::HitError;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};
use tracing::instrument;

/// Hits needed on a target before it counts as closed.
pub const CLOSE_THRESHOLD: u32 = 3;

/// A scoring target: the numbers 15 through 20 and the bullseye.
///
/// Targets travel over the wire as their face value (`25` for the bull),
/// so deserializing an unknown number fails with [`HitError::InvalidTarget`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    derive_more::Display,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum Target {
    /// The 15 wedge.
    #[display("15")]
    Fifteen,
    /// The 16 wedge.
    #[display("16")]
    Sixteen,
    /// The 17 wedge.
    #[display("17")]
    Seventeen,
    /// The 18 wedge.
    #[display("18")]
    Eighteen,
    /// The 19 wedge.
    #[display("19")]
    Nineteen,
    /// The 20 wedge.
    #[display("20")]
    Twenty,
    /// The bullseye, worth 25.
    #[display("Bull")]
    Bull,
}

impl Target {
    /// All targets in catalog order (15..=20, then the bull).
    pub const ALL: [Target; Target::COUNT] = [
        Target::Fifteen,
        Target::Sixteen,
        Target::Seventeen,
        Target::Eighteen,
        Target::Nineteen,
        Target::Twenty,
        Target::Bull,
    ];

    /// Points awarded for one scoring hit on this target.
    pub const fn value(self) -> u32 {
        match self {
            Target::Fifteen => 15,
            Target::Sixteen => 16,
            Target::Seventeen => 17,
            Target::Eighteen => 18,
            Target::Nineteen => 19,
            Target::Twenty => 20,
            Target::Bull => 25,
        }
    }

    /// Index of this target in [`Target::ALL`], used for per-target arrays.
    pub const fn position(self) -> usize {
        self as usize
    }
}

impl TryFrom<i64> for Target {
    type Error = HitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Target::ALL
            .into_iter()
            .find(|target| i64::from(target.value()) == value)
            .ok_or(HitError::InvalidTarget(value))
    }
}

impl TryFrom<u32> for Target {
    type Error = HitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Target::try_from(i64::from(value))
    }
}

impl From<Target> for u32 {
    fn from(target: Target) -> Self {
        target.value()
    }
}

/// Looks up the point value of a raw target number.
///
/// # Errors
///
/// Returns [`HitError::InvalidTarget`] if `target` is not one of
/// 15, 16, 17, 18, 19, 20 or 25.
#[instrument]
pub fn value_of(target: i64) -> Result<u32, HitError> {
    Target::try_from(target).map(Target::value)
}

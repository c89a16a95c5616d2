//! Error types for the cricket engine.

use derive_more::{Display, Error};

/// Why a hit was rejected.
///
/// Every variant is detected before the game is touched, so a rejected hit
/// never leaves a partial update behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HitError {
    /// The player index does not address a player in this game.
    #[display("Invalid player {index}: game has {players} players")]
    InvalidPlayer {
        /// Requested player index, as sent.
        index: i64,
        /// Number of players in the game.
        players: usize,
    },

    /// The target is not one of 15-20 or 25.
    #[display("Invalid target {_0}: must be 15-20 or 25 (bullseye)")]
    InvalidTarget(#[error(not(source))] i64),

    /// A single throw registers between one and three hits.
    #[display("Invalid hit count {_0}: must be between 1 and 3")]
    InvalidHitCount(#[error(not(source))] i64),

    /// A winner has already been decided.
    #[display("Game is already finished")]
    GameAlreadyFinished,
}

impl HitError {
    /// Stable machine-readable code for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            HitError::InvalidPlayer { .. } => "invalid_player",
            HitError::InvalidTarget(_) => "invalid_target",
            HitError::InvalidHitCount(_) => "invalid_hit_count",
            HitError::GameAlreadyFinished => "game_already_finished",
        }
    }
}

/// A game cannot be set up with the requested number of players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cannot start a game with {requested} players: must be between {min} and {max}")]
pub struct SetupError {
    /// Requested player count.
    pub requested: usize,
    /// Smallest supported player count.
    pub min: usize,
    /// Largest supported player count.
    pub max: usize,
}

//! Cricket darts scoring engine.
//!
//! Turns raw "player X hit target Y N times" events into cricket-legal
//! scores, closings and win detection.
//!
//! # Architecture
//!
//! - **Targets**: the fixed catalog (15-20 and the bull) and its point values
//! - **Players**: running hit counts and score per participant
//! - **Rules**: pure scoring and win functions
//! - **Game**: validates and applies hits, keeps the hit log
//! - **Invariants**: properties checked after every accepted hit
//!
//! # Example
//!
//! ```
//! use darts_cricket::{Game, GameStatus};
//!
//! let mut game = Game::new(2)?;
//! game.record_hit(0, 20, 3)?; // closes 20
//! let outcome = game.record_hit(0, 20, 2)?; // scores 40 while player 1 is open
//! assert_eq!(outcome.points, 40);
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod invariants;
mod player;
pub mod rules;
mod snapshot;
mod target;

pub use action::{Hit, MAX_HITS_PER_THROW};
pub use error::{HitError, SetupError};
pub use game::{DEFAULT_PLAYERS, Game, GameStatus, HitOutcome, MAX_PLAYERS, MIN_PLAYERS};
pub use player::PlayerState;
pub use snapshot::Snapshot;
pub use target::{CLOSE_THRESHOLD, Target, value_of};

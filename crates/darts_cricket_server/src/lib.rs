//! HTTP scoring server for cricket darts.
//!
//! # Architecture
//!
//! - **Session**: one shared game behind a read/write lock
//! - **Server**: axum routes for `/status`, `/hit`, `/reset` and `/health`
//! - **Config**: TOML file plus CLI and environment overrides
//! - **Client**: typed REST client and scoreboard rendering for the CLI

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod client;
mod config;
mod server;
mod session;

pub use client::{RestClient, render_scoreboard};
pub use config::{ConfigError, ServerConfig};
pub use server::{ApiError, ErrorBody, HitRequest, create_router, run};
pub use session::{GameSession, RECENT_REQUEST_CAPACITY, SharedSession};

//! Command-line interface for darts_cricket.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Darts Cricket - scoring server and client
#[derive(Parser, Debug)]
#[command(name = "darts_cricket")]
#[command(about = "Cricket darts scoring server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP scoring server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long, env = "CRICKET_CONFIG")]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long, env = "CRICKET_HOST")]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long, env = "CRICKET_PORT")]
        port: Option<u16>,

        /// Number of players (2-10)
        #[arg(long, env = "CRICKET_PLAYERS")]
        players: Option<usize>,
    },

    /// Print the scoreboard of a running server
    Status {
        /// Server URL
        #[arg(long, env = "CRICKET_SERVER_URL", default_value = "http://localhost:8080")]
        server_url: String,
    },

    /// Record hits on a running server
    Hit {
        /// Player index (0-based)
        #[arg(long, allow_negative_numbers = true)]
        player: i64,

        /// Target number (15-20, 25 for bullseye)
        #[arg(long, allow_negative_numbers = true)]
        target: i64,

        /// Number of hits (1-3)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        hits: i64,

        /// Id that lets the server drop a retried request
        #[arg(long)]
        request_id: Option<String>,

        /// Server URL
        #[arg(long, env = "CRICKET_SERVER_URL", default_value = "http://localhost:8080")]
        server_url: String,
    },
}

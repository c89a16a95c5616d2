//! Darts Cricket - unified CLI
//!
//! Runs the scoring server or talks to a running one.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use darts_cricket_server::cli::{Cli, Command};
use darts_cricket_server::{HitRequest, RestClient, ServerConfig, render_scoreboard};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            players,
        } => {
            initialize_tracing("info,darts_cricket=debug,darts_cricket_server=debug,tower_http=debug");
            run_server(config, host, port, players).await
        }
        Command::Status { server_url } => {
            initialize_tracing("warn");
            let snapshot = RestClient::new(server_url).status().await?;
            print!("{}", render_scoreboard(&snapshot));
            Ok(())
        }
        Command::Hit {
            player,
            target,
            hits,
            request_id,
            server_url,
        } => {
            initialize_tracing("warn");
            let request = HitRequest {
                player_idx: player,
                target,
                hits,
                request_id,
            };
            let snapshot = RestClient::new(server_url).record_hit(&request).await?;
            print!("{}", render_scoreboard(&snapshot));
            Ok(())
        }
    }
}

/// Run the HTTP scoring server
#[instrument(skip_all)]
async fn run_server(
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    players: Option<usize>,
) -> Result<()> {
    let config = ServerConfig::load(config.as_deref())?.with_overrides(host, port, players)?;
    info!(address = %config.bind_address(), players = *config.players(), "Starting cricket server");
    darts_cricket_server::run(config).await
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

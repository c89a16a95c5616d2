//! Axum HTTP server for the cricket scoreboard client.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/status` | Players, scores and capped hit counts |
//! | POST | `/hit` | Record hits for a player on a target |
//! | POST | `/reset` | Start a new game |
//!
//! `POST /hit` is not idempotent. Clients that retry should send a
//! `request_id`; a repeated id returns the current status without
//! recording the hit again.

use crate::config::ServerConfig;
use crate::session::{GameSession, SharedSession};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use darts_cricket::{HitError, Snapshot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

/// Builds the router over a shared session.
pub fn create_router(session: SharedSession, cors_max_age: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(cors_max_age);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/status", get(handle_get_status))
        .route("/hit", post(handle_record_hit))
        .route("/reset", post(handle_reset))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(session)
}

/// Binds the configured address and serves until Ctrl+C.
#[instrument(skip(config), fields(address = %config.bind_address()))]
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let session = Arc::new(GameSession::new(*config.players())?);
    let app = create_router(session, config.cors_max_age());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, players = *config.players(), "Cricket server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
    }
}

// ── Request/Response types ──────────────────────────────────────────

/// Body of `POST /hit`.
///
/// Numbers are kept as sent so that a negative or oversized value reaches
/// the engine and is reported as the precondition it breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitRequest {
    /// Index of the throwing player.
    pub player_idx: i64,
    /// Target number: 15-20 or 25.
    pub target: i64,
    /// Hits on the target, 1 to 3.
    pub hits: i64,
    /// Optional client-generated id used to drop retried requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// A rejected request, rendered as an HTTP error.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ApiError {
    /// The engine refused the hit.
    #[display("{_0}")]
    Hit(HitError),
    /// The body was not a JSON hit request.
    #[display("{}", _0.body_text())]
    Malformed(JsonRejection),
}

impl ApiError {
    /// Status code for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Hit(
                HitError::InvalidPlayer { .. }
                | HitError::InvalidTarget(_)
                | HitError::InvalidHitCount(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::Hit(HitError::GameAlreadyFinished) => StatusCode::CONFLICT,
            ApiError::Malformed(rejection) => rejection.status(),
        }
    }

    /// Machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Hit(e) => e.kind(),
            ApiError::Malformed(_) => "malformed_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_status(State(session): State<SharedSession>) -> Json<Snapshot> {
    Json(session.status())
}

#[instrument(skip_all)]
async fn handle_record_hit(
    State(session): State<SharedSession>,
    payload: Result<Json<HitRequest>, JsonRejection>,
) -> Result<Json<Snapshot>, ApiError> {
    let Json(req) =
        payload.inspect_err(|e| warn!(error = %e.body_text(), "Malformed hit request"))?;
    debug!(player = req.player_idx, target = req.target, hits = req.hits, "Hit requested");

    let snapshot = session
        .record_hit_once(req.request_id.as_deref(), req.player_idx, req.target, req.hits)
        .inspect_err(|e| warn!(error = %e, kind = e.kind(), "Hit rejected"))?;
    Ok(Json(snapshot))
}

async fn handle_reset(State(session): State<SharedSession>) -> Json<Snapshot> {
    Json(session.reset())
}

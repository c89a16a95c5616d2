//! The shared game session behind the HTTP API.

use darts_cricket::{Game, HitError, SetupError, Snapshot};
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, instrument};

/// How many request ids are remembered for duplicate detection.
pub const RECENT_REQUEST_CAPACITY: usize = 128;

/// Session handle shared across request handlers.
pub type SharedSession = Arc<GameSession>;

#[derive(Debug)]
struct SessionState {
    game: Game,
    recent_requests: VecDeque<String>,
}

/// One game, guarded for concurrent callers.
///
/// Hits take the write lock and build their snapshot before releasing it;
/// status reads share the read lock. A reader therefore sees a game either
/// before or after a hit, never halfway through one.
///
/// Recording a hit is not idempotent. Callers that may retry should pass a
/// request id to [`GameSession::record_hit_once`].
///
/// The game keeps its full hit log until [`GameSession::reset`] replaces it,
/// so memory grows with every accepted hit for as long as one game runs.
#[derive(Debug)]
pub struct GameSession {
    player_count: usize,
    state: RwLock<SessionState>,
}

impl GameSession {
    /// Creates a session running a fresh game for `player_count` players.
    #[instrument]
    pub fn new(player_count: usize) -> Result<Self, SetupError> {
        let game = Game::new(player_count)?;
        info!(player_count, "Created game session");
        Ok(Self {
            player_count,
            state: RwLock::new(SessionState {
                game,
                recent_requests: VecDeque::new(),
            }),
        })
    }

    /// Number of players in each game of this session.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Current status. Never fails.
    #[instrument(skip(self))]
    pub fn status(&self) -> Snapshot {
        // Poisoning cannot leave a half-applied hit: the game is only
        // mutated after every check has passed.
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.game.snapshot()
    }

    /// Records a hit and returns the resulting status.
    #[instrument(skip(self))]
    pub fn record_hit(
        &self,
        player_index: i64,
        target: i64,
        hit_count: i64,
    ) -> Result<Snapshot, HitError> {
        self.record_hit_once(None, player_index, target, hit_count)
    }

    /// Records a hit unless `request_id` was already applied recently.
    ///
    /// A repeated id returns the current status without touching the game.
    /// Ids are only remembered for hits that succeeded.
    #[instrument(skip(self))]
    pub fn record_hit_once(
        &self,
        request_id: Option<&str>,
        player_index: i64,
        target: i64,
        hit_count: i64,
    ) -> Result<Snapshot, HitError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(id) = request_id
            && state.recent_requests.iter().any(|seen| seen == id)
        {
            info!(request_id = id, "Duplicate hit request ignored");
            return Ok(state.game.snapshot());
        }

        let outcome = state.game.record_hit(player_index, target, hit_count)?;
        debug!(points = outcome.points, status = ?outcome.status, "Hit recorded");

        if let Some(id) = request_id {
            if state.recent_requests.len() == RECENT_REQUEST_CAPACITY {
                state.recent_requests.pop_front();
            }
            state.recent_requests.push_back(id.to_string());
        }

        Ok(state.game.snapshot())
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Snapshot {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        // player_count was validated when the session was created
        state.game = Game::new(self.player_count).unwrap_or_default();
        state.recent_requests.clear();
        info!(player_count = self.player_count, "Game reset");
        state.game.snapshot()
    }
}

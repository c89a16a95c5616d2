//! The cricket scoring engine.

use crate::action::{Hit, MAX_HITS_PER_THROW};
use crate::error::{HitError, SetupError};
use crate::invariants::{CricketInvariants, InvariantSet};
use crate::player::PlayerState;
use crate::rules::{check_winner, opponent_open, points_for_hit};
use crate::snapshot::Snapshot;
use crate::target::Target;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 10;

/// Player count used when none is configured.
pub const DEFAULT_PLAYERS: usize = 2;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Hits are still being accepted.
    InProgress,
    /// The player at this index has won. Terminal.
    Won(usize),
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    /// The winner's index, if any.
    pub fn winner(&self) -> Option<usize> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(index) => Some(*index),
        }
    }
}

/// What a successful hit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitOutcome {
    /// The hit as applied.
    pub hit: Hit,
    /// Points the hit earned.
    pub points: u32,
    /// Game status after the hit.
    pub status: GameStatus,
}

/// A single game of cricket.
///
/// The only mutation is [`Game::record_hit`] (or [`Game::apply`] for an
/// already-typed [`Hit`]). Every check runs before the state is touched, so a
/// rejected hit leaves the game exactly as it was.
///
/// Every accepted hit is appended to [`Game::history`] for the life of the
/// game. Debug builds re-check the invariants over that whole log after each
/// hit, so that check grows linearly with the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: Vec<PlayerState>,
    status: GameStatus,
    history: Vec<Hit>,
}

impl Game {
    /// Creates a game for `player_count` players.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] unless `MIN_PLAYERS <= player_count <= MAX_PLAYERS`.
    #[instrument]
    pub fn new(player_count: usize) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            warn!(player_count, "Rejected player count");
            return Err(SetupError {
                requested: player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        info!(player_count, "Starting new cricket game");
        Ok(Self {
            players: (0..player_count).map(PlayerState::new).collect(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// Returns all players in index order.
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Returns the player at `index`.
    pub fn player(&self, index: usize) -> Option<&PlayerState> {
        self.players.get(index)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether a winner has been decided.
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Returns every accepted hit, oldest first.
    pub fn history(&self) -> &[Hit] {
        &self.history
    }

    /// Takes the wire-shaped view of this game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Records `hit_count` hits by `player_index` on the raw `target` number.
    ///
    /// Arguments are taken as sent by the caller, so negative or oversized
    /// values are reported as the matching [`HitError`] rather than lost.
    ///
    /// # Errors
    ///
    /// Checked in order, before any mutation:
    /// [`HitError::GameAlreadyFinished`], [`HitError::InvalidPlayer`],
    /// [`HitError::InvalidTarget`], [`HitError::InvalidHitCount`].
    #[instrument(skip(self))]
    pub fn record_hit(
        &mut self,
        player_index: i64,
        target: i64,
        hit_count: i64,
    ) -> Result<HitOutcome, HitError> {
        self.check_open()?;
        let player = self.check_player(player_index)?;
        let target = Target::try_from(target).inspect_err(|e| warn!(error = %e, "Rejected hit"))?;
        let count = check_hit_count(hit_count)?;

        Ok(self.apply_unchecked(Hit::new(player, target, count)))
    }

    /// Applies an already-typed hit.
    ///
    /// # Errors
    ///
    /// Same as [`Game::record_hit`], minus the target check the type already rules out.
    #[instrument(skip(self, hit), fields(hit = %hit))]
    pub fn apply(&mut self, hit: Hit) -> Result<HitOutcome, HitError> {
        self.check_open()?;
        self.check_player(i64::try_from(hit.player).unwrap_or(i64::MAX))?;
        check_hit_count(i64::from(hit.count))?;

        Ok(self.apply_unchecked(hit))
    }

    /// Replays a sequence of hits on top of this game.
    ///
    /// Stops at the first rejected hit and returns its error.
    #[instrument(skip(self, hits), fields(hits = hits.len()))]
    pub fn replay(mut self, hits: &[Hit]) -> Result<Self, HitError> {
        for hit in hits {
            self.apply(*hit)?;
        }
        Ok(self)
    }

    fn check_open(&self) -> Result<(), HitError> {
        if self.is_finished() {
            warn!(status = ?self.status, "Hit attempted on finished game");
            return Err(HitError::GameAlreadyFinished);
        }
        Ok(())
    }

    fn check_player(&self, index: i64) -> Result<usize, HitError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.players.len())
            .ok_or_else(|| {
                warn!(index, players = self.players.len(), "Hit for unknown player");
                HitError::InvalidPlayer {
                    index,
                    players: self.players.len(),
                }
            })
    }

    fn apply_unchecked(&mut self, hit: Hit) -> HitOutcome {
        let open = opponent_open(&self.players, hit.player, hit.target);
        let player = &mut self.players[hit.player];
        let before = player.hits_on(hit.target);
        let points = points_for_hit(before, hit.count, hit.target.value(), open);

        player.apply(hit.target, hit.count, points);
        self.history.push(hit);

        debug!(
            player = hit.player,
            target = %hit.target,
            before,
            after = before + hit.count,
            points,
            opponent_open = open,
            "Hit applied"
        );

        if let Some(winner) = check_winner(&self.players, hit.player) {
            info!(winner, score = *self.players[winner].score(), "Game won");
            self.status = GameStatus::Won(winner);
        }

        debug_assert!(
            CricketInvariants::check_all(self).is_ok(),
            "cricket invariants violated after {hit}"
        );

        HitOutcome {
            hit,
            points,
            status: self.status,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            players: (0..DEFAULT_PLAYERS).map(PlayerState::new).collect(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }
}

fn check_hit_count(hit_count: i64) -> Result<u32, HitError> {
    u32::try_from(hit_count)
        .ok()
        .filter(|count| (1..=MAX_HITS_PER_THROW).contains(count))
        .ok_or_else(|| {
            warn!(hit_count, "Rejected hit count");
            HitError::InvalidHitCount(hit_count)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_player_counts() {
        assert!(Game::new(1).is_err());
        assert!(Game::new(11).is_err());
        assert_eq!(Game::new(10).unwrap().players().len(), 10);
    }

    #[test]
    fn test_precondition_order() {
        let mut game = Game::default();
        // Bad player reported before bad target and bad count.
        assert!(matches!(
            game.record_hit(5, 99, 9),
            Err(HitError::InvalidPlayer { index: 5, players: 2 })
        ));
        // Bad target reported before bad count.
        assert_eq!(game.record_hit(0, 99, 9), Err(HitError::InvalidTarget(99)));
        assert_eq!(game.record_hit(0, 20, 0), Err(HitError::InvalidHitCount(0)));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_negative_and_oversized_inputs_name_their_precondition() {
        let mut game = Game::default();
        assert_eq!(
            game.record_hit(-1, 20, 1),
            Err(HitError::InvalidPlayer { index: -1, players: 2 })
        );
        assert_eq!(game.record_hit(0, -20, 1), Err(HitError::InvalidTarget(-20)));
        assert_eq!(game.record_hit(0, 20, -1), Err(HitError::InvalidHitCount(-1)));
        assert_eq!(
            game.record_hit(0, 20, 5_000_000_000),
            Err(HitError::InvalidHitCount(5_000_000_000))
        );
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_outcome_reports_points() {
        let mut game = Game::default();
        game.record_hit(0, 17, 2).unwrap();
        let outcome = game.record_hit(0, 17, 3).unwrap();
        assert_eq!(outcome.points, 34);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(game.player(0).unwrap().hits_on(Target::Seventeen), 5);
    }

    #[test]
    fn test_apply_typed_hit_checks_count() {
        let mut game = Game::default();
        let result = game.apply(Hit::new(0, Target::Bull, 4));
        assert_eq!(result, Err(HitError::InvalidHitCount(4)));
    }

    #[test]
    fn test_replay_matches_live_game() {
        let hits = [
            Hit::new(0, Target::Twenty, 3),
            Hit::new(1, Target::Twenty, 1),
            Hit::new(0, Target::Twenty, 2),
        ];
        let replayed = Game::default().replay(&hits).unwrap();
        let mut live = Game::default();
        for hit in hits {
            live.apply(hit).unwrap();
        }
        assert_eq!(replayed, live);
        assert_eq!(*replayed.player(0).unwrap().score(), 40);
    }
}

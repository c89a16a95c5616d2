//! Win detection for cricket.

use crate::player::PlayerState;
use tracing::instrument;

/// Whether `player` satisfies the win condition against `players`: every
/// target closed and a score no lower than anyone else's.
pub fn is_winner(players: &[PlayerState], player: &PlayerState) -> bool {
    player.has_closed_all() && players.iter().all(|other| other.score() <= player.score())
}

/// Checks whether the game has a winner.
///
/// Scans every player, not just the one who threw, since score ordering is a
/// property of the whole table. When more than one player qualifies (only
/// possible on equal scores), the acting player takes precedence, then the
/// lowest index.
#[instrument(skip(players))]
pub fn check_winner(players: &[PlayerState], acting: usize) -> Option<usize> {
    let mut qualifying = players
        .iter()
        .filter(|p| is_winner(players, p))
        .map(|p| *p.index());

    let first = qualifying.next()?;
    if first == acting || qualifying.any(|i| i == acting) {
        Some(acting)
    } else {
        Some(first)
    }
}

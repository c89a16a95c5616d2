//! Typed HTTP client for a running cricket server.

use crate::server::{ErrorBody, HitRequest};
use anyhow::{Context, Result, bail};
use darts_cricket::{CLOSE_THRESHOLD, Snapshot, Target};
use tracing::{debug, info, instrument};

/// Client for the scoring REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the current status.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn status(&self) -> Result<Snapshot> {
        let response = self
            .client
            .get(format!("{}/status", self.base_url))
            .send()
            .await
            .context("Failed to reach cricket server")?;

        Self::parse(response).await
    }

    /// Records a hit and returns the resulting status.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn record_hit(&self, request: &HitRequest) -> Result<Snapshot> {
        info!("Posting hit");
        let response = self
            .client
            .post(format!("{}/hit", self.base_url))
            .json(request)
            .send()
            .await
            .context("Failed to reach cricket server")?;

        Self::parse(response).await
    }

    async fn parse(response: reqwest::Response) -> Result<Snapshot> {
        let status = response.status();
        debug!(%status, "Response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) => bail!("{} ({}): {}", status, err.error, err.message),
                Err(_) => bail!("{}: {}", status, body),
            }
        }

        response
            .json::<Snapshot>()
            .await
            .context("Failed to parse status response")
    }
}

/// Renders a status as a plain-text scoreboard.
///
/// Closed numbers show as `Closed`, others as `n/3`.
pub fn render_scoreboard(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for (i, player) in snapshot.players.iter().enumerate() {
        let score = snapshot.scores.get(i).copied().unwrap_or_default();
        out.push_str(&format!("Player {}: {} points\n", player + 1, score));

        let hits = snapshot.hits.get(i).map(Vec::as_slice).unwrap_or_default();
        for (target, &count) in Target::ALL.iter().zip(hits) {
            let mark = if count >= CLOSE_THRESHOLD {
                "Closed".to_string()
            } else {
                format!("{}/{}", count, CLOSE_THRESHOLD)
            };
            out.push_str(&format!("  {:>4}: {}\n", target.to_string(), mark));
        }
    }

    match snapshot.winner {
        Some(winner) => out.push_str(&format!("Winner: Player {}\n", winner + 1)),
        None => out.push_str("Game in progress\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoreboard_marks_closed_numbers() {
        let snapshot = Snapshot {
            players: vec![0, 1],
            scores: vec![40, 0],
            hits: vec![vec![0, 0, 0, 0, 0, 3, 1], vec![2, 0, 0, 0, 0, 1, 0]],
            finished: false,
            winner: None,
        };

        let board = render_scoreboard(&snapshot);
        assert!(board.contains("Player 1: 40 points"));
        assert!(board.contains("    20: Closed"));
        assert!(board.contains("  Bull: 1/3"));
        assert!(board.contains("    15: 2/3"));
        assert!(board.ends_with("Game in progress\n"));
    }

    #[test]
    fn test_scoreboard_names_winner() {
        let snapshot = Snapshot {
            players: vec![0, 1],
            scores: vec![0, 15],
            hits: vec![vec![3; 7], vec![3; 7]],
            finished: true,
            winner: Some(1),
        };
        assert!(render_scoreboard(&snapshot).ends_with("Winner: Player 2\n"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = RestClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}

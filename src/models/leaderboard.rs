// src/models/leaderboard.rs

use serde::Serialize;

/// One row of the leaderboard as returned to clients.
/// Ranks are 1-based and sequential; tied scores still get distinct ranks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: usize,
    pub rank: usize,
    pub questions_answered_correctly: usize,
}

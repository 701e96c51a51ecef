// src/handlers/leaderboard.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, models::leaderboard::LeaderboardEntry, store::ledger::ScoreLedger};

/// Returns the current leaderboard. Always 200, empty when nobody has
/// scored yet.
pub async fn get_leaderboard(
    State(ledger): State<Arc<ScoreLedger>>,
) -> Result<impl IntoResponse, AppError> {
    let leaderboard = build_leaderboard(&ledger);
    tracing::debug!("Returning leaderboard with {} entries", leaderboard.len());
    Ok(Json(leaderboard))
}

/// Derives the ranked leaderboard from a ledger snapshot.
///
/// Sorted by score descending, ties broken by username ascending. Ranks are
/// the sequential 1-based position in that order, so tied users still get
/// distinct ranks.
pub fn build_leaderboard(ledger: &ScoreLedger) -> Vec<LeaderboardEntry> {
    let scores = ledger.all_scores();

    let mut entries: Vec<LeaderboardEntry> = scores
        .into_iter()
        .map(|(username, score)| {
            let questions_answered_correctly = ledger.questions_correct(&username);
            LeaderboardEntry {
                username,
                score,
                rank: 0,
                questions_answered_correctly,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.username.cmp(&b.username))
    });

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    entries
}

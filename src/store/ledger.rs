// src/store/ledger.rs

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use uuid::Uuid;

/// In-memory ledger of which questions each user has answered correctly.
///
/// A user's score is the size of their set of correctly-answered question
/// ids, so `score(u) == |distinct correct ids for u|` holds by construction
/// and a duplicate correct submission can never double-count.
///
/// The whole check-then-insert sequence runs under a single lock
/// acquisition, keeping the at-most-one-credit invariant under concurrent
/// submissions.
#[derive(Debug, Default)]
pub struct ScoreLedger {
    correct_by_user: Mutex<HashMap<String, HashSet<Uuid>>>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer submission for a user.
    ///
    /// Incorrect answers have no effect. A correct answer credits the user
    /// once per question; repeats are no-ops.
    pub fn record_answer(&self, username: &str, question_id: Uuid, is_correct: bool) {
        if !is_correct {
            tracing::debug!("Answer was incorrect, no score update for {}", username);
            return;
        }

        let mut correct_by_user = self.correct_by_user.lock().unwrap();
        let correct_questions = correct_by_user.entry(username.to_string()).or_default();
        if correct_questions.insert(question_id) {
            tracing::debug!(
                "First correct answer for question {} by {}. New score: {}",
                question_id,
                username,
                correct_questions.len()
            );
        } else {
            tracing::debug!(
                "Duplicate correct answer for question {} by {}. Score unchanged.",
                question_id,
                username
            );
        }
    }

    /// The user's score, 0 for users never seen.
    pub fn score(&self, username: &str) -> usize {
        self.correct_by_user
            .lock()
            .unwrap()
            .get(username)
            .map_or(0, HashSet::len)
    }

    /// Count of distinct questions the user answered correctly.
    /// Equal to `score` by construction; kept as a separate accessor for API
    /// symmetry.
    pub fn questions_correct(&self, username: &str) -> usize {
        self.score(username)
    }

    /// A detached snapshot of all user scores. Mutating the returned map has
    /// no effect on the ledger.
    pub fn all_scores(&self) -> HashMap<String, usize> {
        self.correct_by_user
            .lock()
            .unwrap()
            .iter()
            .map(|(username, correct)| (username.clone(), correct.len()))
            .collect()
    }
}

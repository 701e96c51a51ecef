// src/models/answer.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::question::{Question, TriviaQuestion};

/// DTO for an answer submission.
///
/// `question_id` and `selected_answer` deserialize as optional so that an
/// absent or null field reaches the validator and gets a field-naming error
/// message instead of a generic deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub question_id: Option<Uuid>,
    #[serde(default)]
    pub selected_answer: Option<String>,
}

/// DTO for the result of an answer submission.
///
/// `original_question` deliberately includes the correctness flags: the
/// answer key is revealed once the caller has committed to an answer.
/// `next_question` is null when no questions are loaded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub is_correct: bool,
    pub correct_answer: String,
    pub original_question: Question,
    pub next_question: Option<TriviaQuestion>,
}

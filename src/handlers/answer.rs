// src/handlers/answer.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::{
        answer::{AnswerResponse, AnswerSubmission},
        question::{Question, TriviaQuestion},
    },
    state::AppState,
};

/// The four recognized answer labels; position i of a question's options
/// maps to LABELS[i].
pub const LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// Validates a submitted answer, records the outcome, and returns the result
/// together with a fresh next question.
///
/// Validation is fail-fast, in a fixed order, and each failure names the
/// offending field. A well-formed submission referencing an unknown question
/// is a 404, not a validation error, and never touches the ledger.
pub async fn submit_answer(
    State(state): State<AppState>,
    Json(submission): Json<AnswerSubmission>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(
        "Processing answer submission: username={}, questionId={:?}, selectedAnswer={:?}",
        submission.username,
        submission.question_id,
        submission.selected_answer
    );

    if submission.username.is_empty() {
        return Err(AppError::BadRequest("Invalid username".to_string()));
    }
    let Some(question_id) = submission.question_id else {
        return Err(AppError::BadRequest("Invalid questionId".to_string()));
    };
    let selected = match submission.selected_answer.as_deref() {
        Some(label) if LABELS.contains(&label) => label,
        _ => {
            return Err(AppError::BadRequest("Invalid selectedAnswer".to_string()));
        }
    };

    let Some(question) = state.questions.find_by_id(question_id) else {
        tracing::debug!("Question not found: {}", question_id);
        return Err(AppError::NotFound("Question not found".to_string()));
    };

    let correct_answer = correct_label(question)?;
    let is_correct = selected == correct_answer;
    tracing::debug!(
        "User answer {} is {}",
        selected,
        if is_correct { "CORRECT" } else { "INCORRECT" }
    );

    // Always recorded; the ledger itself treats incorrect answers as no-ops.
    state
        .ledger
        .record_answer(&submission.username, question_id, is_correct);

    let mut rng = rand::thread_rng();
    let next_question = state
        .questions
        .find_random(&mut rng)
        .map(|next| TriviaQuestion::from_question(next, state.messages.random_message(&mut rng)));

    Ok(Json(AnswerResponse {
        is_correct,
        correct_answer: correct_answer.to_string(),
        original_question: question.clone(),
        next_question,
    }))
}

/// Determines the label of the question's single correct option via the
/// fixed positional convention 0→A, 1→B, 2→C, 3→D.
///
/// A question with no correct option is a data-integrity violation and
/// surfaces as an internal error, never as a client error.
pub fn correct_label(question: &Question) -> Result<&'static str, AppError> {
    question
        .options
        .iter()
        .position(|option| option.is_correct)
        .and_then(|index| LABELS.get(index).copied())
        .ok_or_else(|| {
            AppError::InternalServerError(format!(
                "No correct answer found for question: {}",
                question.id
            ))
        })
}

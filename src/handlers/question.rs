// src/handlers/question.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{error::AppError, models::question::TriviaQuestion, state::AppState};

/// Serves a random question in its public projection (no correctness flags),
/// decorated with an environment message.
pub async fn random_question(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut rng = rand::thread_rng();

    let Some(question) = state.questions.find_random(&mut rng) else {
        tracing::debug!("No questions available, returning 404");
        return Err(AppError::NotFound("No questions available".to_string()));
    };

    let view = TriviaQuestion::from_question(question, state.messages.random_message(&mut rng));
    tracing::debug!("Returning random trivia question: {}", view.id);

    Ok(Json(view))
}

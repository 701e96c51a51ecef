// src/models/question.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single answer option attached to a question.
/// Exactly one option per question carries `is_correct = true`; the authoring
/// data guarantees this, the code does not re-check it on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: Uuid,
    pub text: String,
    pub is_correct: bool,
}

/// A trivia question as loaded from the startup dataset.
/// Immutable for the process lifetime. Options are ordered; positions 0..4
/// map to the labels A/B/C/D.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub question_text: String,
    pub options: Vec<AnswerOption>,
}

/// DTO for sending a question to the client (excludes correctness flags).
/// This is the only shape a caller sees before submitting an answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriviaQuestion {
    pub id: Uuid,
    pub question_text: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub environment: String,
}

impl TriviaQuestion {
    /// Projects a full question into the public view, attaching a decorative
    /// environment message. Relies on the load-time guarantee of exactly
    /// four options.
    pub fn from_question(question: &Question, environment: &str) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text.clone(),
            option1: question.options[0].text.clone(),
            option2: question.options[1].text.clone(),
            option3: question.options[2].text.clone(),
            option4: question.options[3].text.clone(),
            environment: environment.to_string(),
        }
    }
}

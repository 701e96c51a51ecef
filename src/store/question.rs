// src/store/question.rs

use std::collections::HashMap;

use rand::Rng;
use rand::seq::IteratorRandom;
use uuid::Uuid;

use crate::models::question::Question;

/// Every question must carry exactly this many options; the public view and
/// the label mapping (A/B/C/D) index positions 0..4.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// In-memory store of trivia questions, keyed by id.
/// Populated once at startup and immutable afterwards, so it can be shared
/// across request handlers without locking.
#[derive(Debug)]
pub struct QuestionStore {
    questions: HashMap<Uuid, Question>,
}

impl QuestionStore {
    /// Reads and parses the JSON question dataset at `path`.
    /// Any failure here (missing file, bad JSON, wrong option count) is a
    /// startup error: the service must not serve without its dataset.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let bytes = std::fs::read(path)?;
        let questions: Vec<Question> = serde_json::from_slice(&bytes)?;
        Self::from_questions(questions)
    }

    /// Builds a store from already-parsed questions.
    ///
    /// Rejects questions whose option count is not exactly four. Duplicate
    /// ids are last-write-wins, matching the dataset's documented behavior,
    /// but a warning is logged so a bad dataset is visible at startup.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut map = HashMap::with_capacity(questions.len());
        for question in questions {
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(format!(
                    "question {} has {} options, expected {}",
                    question.id,
                    question.options.len(),
                    OPTIONS_PER_QUESTION
                )
                .into());
            }
            if let Some(previous) = map.insert(question.id, question) {
                tracing::warn!(
                    "Duplicate question id {} in dataset, keeping the later entry",
                    previous.id
                );
            }
        }
        Ok(Self { questions: map })
    }

    /// Exact lookup. Absence is a normal outcome, not an error.
    pub fn find_by_id(&self, id: Uuid) -> Option<&Question> {
        self.questions.get(&id)
    }

    /// Uniformly selects one question, independently per call.
    /// Returns `None` when the store is empty.
    pub fn find_random<R: Rng>(&self, rng: &mut R) -> Option<&Question> {
        self.questions.values().choose(rng)
    }

    /// All questions, in no particular order.
    pub fn all(&self) -> Vec<&Question> {
        self.questions.values().collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

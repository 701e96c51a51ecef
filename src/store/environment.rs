// src/store/environment.rs

use rand::Rng;

/// The fixed set of decorative serving-environment messages.
const MESSAGES: [&str; 4] = [
    "This question served from a single-node in-memory store.",
    "This question served by an async runtime with no database in sight.",
    "This question served straight out of process memory, zero round trips.",
    "This question served by a stateless handler over a shared question map.",
];

/// Provider of random environment messages attached to each served question.
/// Purely cosmetic; selection over a non-empty constant list cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentMessages;

impl EnvironmentMessages {
    /// Uniformly picks one of the fixed messages.
    pub fn random_message<R: Rng>(&self, rng: &mut R) -> &'static str {
        MESSAGES[rng.gen_range(0..MESSAGES.len())]
    }

    /// The full message set, for tests that assert membership.
    pub fn all(&self) -> &'static [&'static str] {
        &MESSAGES
    }
}

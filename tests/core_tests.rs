// tests/core_tests.rs
//
// Direct tests of the core components: score ledger, question store,
// environment messages, and leaderboard construction.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use trivia_backend::handlers::leaderboard::build_leaderboard;
use trivia_backend::models::question::{AnswerOption, Question, TriviaQuestion};
use trivia_backend::store::environment::EnvironmentMessages;
use trivia_backend::store::ledger::ScoreLedger;
use trivia_backend::store::question::QuestionStore;
use uuid::Uuid;

fn question_with_id(id: Uuid, text: &str, correct_position: usize) -> Question {
    Question {
        id,
        question_text: text.to_string(),
        options: (0..4)
            .map(|position| AnswerOption {
                id: Uuid::new_v4(),
                text: format!("option {}", position),
                is_correct: position == correct_position,
            })
            .collect(),
    }
}

fn sample_question(text: &str) -> Question {
    question_with_id(Uuid::new_v4(), text, 0)
}

// --- Score Ledger ---

#[test]
fn correct_credit_is_idempotent() {
    let ledger = ScoreLedger::new();
    let question_id = Uuid::new_v4();

    ledger.record_answer("alice", question_id, true);
    ledger.record_answer("alice", question_id, true);

    assert_eq!(ledger.score("alice"), 1);
}

#[test]
fn incorrect_answers_never_score() {
    let ledger = ScoreLedger::new();
    let question_id = Uuid::new_v4();

    for _ in 0..10 {
        ledger.record_answer("alice", question_id, false);
    }

    assert_eq!(ledger.score("alice"), 0);
}

#[test]
fn score_always_matches_questions_correct() {
    let ledger = ScoreLedger::new();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    ledger.record_answer("alice", first, true);
    assert_eq!(ledger.score("alice"), ledger.questions_correct("alice"));

    ledger.record_answer("alice", second, false);
    ledger.record_answer("alice", second, true);
    ledger.record_answer("alice", first, true);

    assert_eq!(ledger.score("alice"), 2);
    assert_eq!(ledger.score("alice"), ledger.questions_correct("alice"));
}

#[test]
fn unseen_user_scores_zero() {
    let ledger = ScoreLedger::new();
    assert_eq!(ledger.score("nobody"), 0);
    assert_eq!(ledger.questions_correct("nobody"), 0);
}

#[test]
fn all_scores_returns_detached_snapshot() {
    let ledger = ScoreLedger::new();
    ledger.record_answer("alice", Uuid::new_v4(), true);

    let mut snapshot = ledger.all_scores();
    snapshot.insert("alice".to_string(), 99);
    snapshot.insert("mallory".to_string(), 42);

    assert_eq!(ledger.score("alice"), 1);
    assert_eq!(ledger.score("mallory"), 0);
    assert_eq!(ledger.all_scores().len(), 1);
}

#[test]
fn concurrent_duplicate_submissions_credit_once() {
    let ledger = Arc::new(ScoreLedger::new());
    let question_id = Uuid::new_v4();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ledger = ledger.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    ledger.record_answer("alice", question_id, true);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ledger.score("alice"), 1);
}

#[test]
fn concurrent_distinct_questions_all_credit() {
    let ledger = Arc::new(ScoreLedger::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ledger = ledger.clone();
            std::thread::spawn(move || {
                ledger.record_answer("alice", Uuid::new_v4(), true);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(ledger.score("alice"), 8);
}

// --- Leaderboard Builder ---

#[test]
fn leaderboard_sorts_by_score_descending_with_sequential_ranks() {
    let ledger = ScoreLedger::new();
    for (username, count) in [("bob", 20), ("alice", 15), ("charlie", 10)] {
        for _ in 0..count {
            ledger.record_answer(username, Uuid::new_v4(), true);
        }
    }

    let entries = build_leaderboard(&ledger);

    let summary: Vec<(&str, usize, usize)> = entries
        .iter()
        .map(|e| (e.username.as_str(), e.score, e.rank))
        .collect();
    assert_eq!(
        summary,
        vec![("bob", 20, 1), ("alice", 15, 2), ("charlie", 10, 3)]
    );
    for entry in &entries {
        assert_eq!(entry.questions_answered_correctly, entry.score);
    }
}

#[test]
fn leaderboard_ties_resolve_alphabetically_with_distinct_ranks() {
    let ledger = ScoreLedger::new();
    let shared: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
    for username in ["charlie", "alice", "bob"] {
        for question_id in &shared {
            ledger.record_answer(username, *question_id, true);
        }
    }

    let entries = build_leaderboard(&ledger);

    let summary: Vec<(&str, usize, usize)> = entries
        .iter()
        .map(|e| (e.username.as_str(), e.score, e.rank))
        .collect();
    assert_eq!(
        summary,
        vec![("alice", 10, 1), ("bob", 10, 2), ("charlie", 10, 3)]
    );
}

#[test]
fn empty_ledger_builds_empty_leaderboard() {
    let ledger = ScoreLedger::new();
    assert!(build_leaderboard(&ledger).is_empty());
}

// --- Question Store ---

#[test]
fn lookup_hits_and_misses() {
    let q = sample_question("first");
    let id = q.id;
    let store = QuestionStore::from_questions(vec![q, sample_question("second")]).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_id(id).unwrap().question_text, "first");
    assert!(store.find_by_id(Uuid::new_v4()).is_none());
}

#[test]
fn random_selection_from_empty_store_is_none() {
    let store = QuestionStore::from_questions(vec![]).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    assert!(store.is_empty());
    assert!(store.find_random(&mut rng).is_none());
}

#[test]
fn random_selection_returns_a_stored_question() {
    let questions: Vec<Question> = (0..5)
        .map(|i| sample_question(&format!("q{}", i)))
        .collect();
    let ids: Vec<Uuid> = questions.iter().map(|q| q.id).collect();
    let store = QuestionStore::from_questions(questions).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let picked = store.find_random(&mut rng).unwrap();
        assert!(ids.contains(&picked.id));
    }
}

#[test]
fn load_rejects_wrong_option_count() {
    let mut q = sample_question("truncated");
    q.options.pop();

    assert!(QuestionStore::from_questions(vec![q]).is_err());
}

#[test]
fn duplicate_ids_keep_the_later_entry() {
    let id = Uuid::new_v4();
    let first = question_with_id(id, "first", 0);
    let second = question_with_id(id, "second", 1);

    let store = QuestionStore::from_questions(vec![first, second]).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id(id).unwrap().question_text, "second");
    assert_eq!(store.all().len(), 1);
}

// --- Answer Validator helpers ---

#[test]
fn correct_label_follows_positional_convention() {
    use trivia_backend::handlers::answer::correct_label;

    for (position, label) in [(0, "A"), (1, "B"), (2, "C"), (3, "D")] {
        let q = question_with_id(Uuid::new_v4(), "positional", position);
        assert_eq!(correct_label(&q).unwrap(), label);
    }
}

#[test]
fn question_without_correct_option_is_an_internal_error() {
    use trivia_backend::error::AppError;
    use trivia_backend::handlers::answer::correct_label;

    let mut q = question_with_id(Uuid::new_v4(), "broken", 0);
    for option in &mut q.options {
        option.is_correct = false;
    }

    match correct_label(&q) {
        Err(AppError::InternalServerError(_)) => {}
        other => panic!("expected internal error, got {:?}", other),
    }
}

// --- Environment Messages & Public View ---

#[test]
fn environment_message_comes_from_the_fixed_set() {
    let messages = EnvironmentMessages;
    let mut rng = StdRng::seed_from_u64(7);

    assert_eq!(messages.all().len(), 4);
    for _ in 0..100 {
        let message = messages.random_message(&mut rng);
        assert!(messages.all().contains(&message));
    }
}

#[test]
fn public_view_never_carries_correctness() {
    let q = question_with_id(Uuid::new_v4(), "hidden answer", 2);
    let view = TriviaQuestion::from_question(&q, "env message");

    assert_eq!(view.option3, "option 2");
    assert_eq!(view.environment, "env message");

    let serialized = serde_json::to_string(&view).unwrap();
    assert!(!serialized.contains("isCorrect"));
}

// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{answer, leaderboard, question},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires the three API endpoints (random question, answer submission,
///   leaderboard).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (stores and ledger).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/api/questions/random", get(question::random_question))
        .route("/api/answers", post(answer::submit_answer))
        .route("/api/leaderboard", get(leaderboard::get_leaderboard))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

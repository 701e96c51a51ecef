// src/main.rs

use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_backend::config::Config;
use trivia_backend::routes;
use trivia_backend::state::AppState;
use trivia_backend::store::environment::EnvironmentMessages;
use trivia_backend::store::ledger::ScoreLedger;
use trivia_backend::store::question::QuestionStore;

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Load the question dataset. Missing or malformed data is fatal: the
    // service must not start serving without its questions.
    let questions = match QuestionStore::load_from_file(&config.questions_file) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(
                "Failed to load questions from {}: {}",
                config.questions_file,
                e
            );
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Successfully loaded {} questions from {}",
        questions.len(),
        config.questions_file
    );

    // Create AppState
    let state = AppState {
        questions: Arc::new(questions),
        ledger: Arc::new(ScoreLedger::new()),
        messages: EnvironmentMessages,
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}

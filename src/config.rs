// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub questions_file: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let questions_file =
            env::var("QUESTIONS_FILE").unwrap_or_else(|_| "data/questions.json".to_string());

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            questions_file,
            rust_log,
        }
    }
}

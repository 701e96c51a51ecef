// src/handlers/mod.rs

pub mod answer;
pub mod leaderboard;
pub mod question;

// src/store/mod.rs

pub mod environment;
pub mod ledger;
pub mod question;

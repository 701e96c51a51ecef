use crate::config::Config;
use crate::store::environment::EnvironmentMessages;
use crate::store::ledger::ScoreLedger;
use crate::store::question::QuestionStore;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<QuestionStore>,
    pub ledger: Arc<ScoreLedger>,
    pub messages: EnvironmentMessages,
    pub config: Config,
}

impl FromRef<AppState> for Arc<QuestionStore> {
    fn from_ref(state: &AppState) -> Self {
        state.questions.clone()
    }
}

impl FromRef<AppState> for Arc<ScoreLedger> {
    fn from_ref(state: &AppState) -> Self {
        state.ledger.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

use crate::config::Config;
use crate::storage::ScoreStore;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ScoreStore>,
    pub config: Config,
}

impl FromRef<AppState> for Arc<ScoreStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

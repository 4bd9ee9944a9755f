use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, store::ResultsStore, utils::window::AccessWindow};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub results: Arc<dyn ResultsStore>,
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for AccessWindow {
    fn from_ref(state: &AppState) -> Self {
        state.config.window
    }
}

impl FromRef<AppState> for Arc<dyn ResultsStore> {
    fn from_ref(state: &AppState) -> Self {
        state.results.clone()
    }
}

use std::sync::Arc;

use axum::extract::FromRef;

use crate::db::TriviaStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
}

impl AppState {
    pub fn new(store: impl TriviaStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl FromRef<AppState> for Arc<dyn TriviaStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

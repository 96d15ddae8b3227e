// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    db::DynStore,
    utils::random::{RandomSource, SeededRandom, ThreadRandom},
};

#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    pub config: Arc<Config>,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    /// Uses a seeded generator when `config.quiz_seed` is set.
    pub fn new(store: DynStore, config: Config) -> Self {
        let random: Arc<dyn RandomSource> = match config.quiz_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self {
            store,
            config: Arc::new(config),
            random,
        }
    }
}

impl FromRef<AppState> for DynStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<dyn RandomSource> {
    fn from_ref(state: &AppState) -> Self {
        state.random.clone()
    }
}

use crate::config::Config;
use crate::store::PetStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: PetStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: PetStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

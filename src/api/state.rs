//! Application state for the wage calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::persistence::{JsonFileStore, StateStore};

/// Shared application state.
///
/// Holds the loaded configuration and the store the calculator form is
/// saved to.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// Where the form is saved.
    store: Arc<dyn StateStore>,
}

impl AppState {
    /// Creates application state with an explicit store.
    pub fn new(config: ConfigLoader, store: impl StateStore + 'static) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Creates application state that saves to the configured state file.
    pub fn with_file_store(config: ConfigLoader) -> Self {
        let store = JsonFileStore::new(config.state_path());
        Self::new(config, store)
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the state store.
    pub fn store(&self) -> &dyn StateStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let state = AppState::new(ConfigLoader::default(), MemoryStore::new());
        let clone = state.clone();

        state.store().save(&Default::default()).unwrap();
        assert!(clone.store().load().unwrap().is_some());
    }
}

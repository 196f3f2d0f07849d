//! Application state for the EOSB Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers. The state is immutable after startup; there
//! is deliberately no mutable service-status flag or other cross-request
//! state anywhere in the service.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains the loaded calculation configuration, shared read-only across
/// all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculation configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

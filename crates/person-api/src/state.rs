//! Application state shared across handlers.

use std::sync::Arc;

use domain::PersonDirectory;

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only set of person ids that exist
    pub directory: Arc<PersonDirectory>,
    pub config: ApiConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(directory: Arc<PersonDirectory>, config: ApiConfig) -> Self {
        Self { directory, config }
    }

    /// Build state from configuration.
    pub fn from_config(config: ApiConfig) -> Self {
        let directory = Arc::new(PersonDirectory::new(config.known_person_ids.iter().copied()));
        Self::new(directory, config)
    }
}

//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::SnapshotRepository;
use crate::services::explainer::ExplainerConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository for profile/plan snapshots
    pub repository: Arc<dyn SnapshotRepository>,
    /// Explainer configuration, if an API key is available
    pub explainer: Option<ExplainerConfig>,
}

impl AppState {
    /// Create state with the given repository, picking up explainer
    /// credentials from the environment when present.
    pub fn new(repository: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            repository,
            explainer: ExplainerConfig::from_env().ok(),
        }
    }

    pub fn with_explainer(mut self, explainer: ExplainerConfig) -> Self {
        self.explainer = Some(explainer);
        self
    }
}

//! Application state shared across handlers

use std::sync::Arc;

use application::PracticeService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Practice service driving selection, scoring and remedies
    pub practice_service: Arc<PracticeService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("practice_service", &self.practice_service)
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}

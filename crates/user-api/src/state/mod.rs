//! Application state
//!
//! Holds the shared state for the Axum application: the use case facade
//! and the configuration.

use std::sync::Arc;

use user_common::AppConfig;
use user_service::UseCaseFacade;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    usecases: Arc<UseCaseFacade>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(usecases: UseCaseFacade, config: AppConfig) -> Self {
        Self {
            usecases: Arc::new(usecases),
            config: Arc::new(config),
        }
    }

    /// Get the use cases
    pub fn usecases(&self) -> &UseCaseFacade {
        &self.usecases
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("usecases", &"UseCaseFacade")
            .field("config", &"AppConfig")
            .finish()
    }
}

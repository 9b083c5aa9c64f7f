//! Service context - dependency container for services
//!
//! Holds the repositories the services depend on.

use std::sync::Arc;

use user_core::traits::UserRepository;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get a shared handle to the user repository
    pub fn shared_user_repo(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.user_repo)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns a validation `ServiceError` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(self.user_repo.ok_or_else(|| {
            ServiceError::validation("user_repo is required")
        })?))
    }
}

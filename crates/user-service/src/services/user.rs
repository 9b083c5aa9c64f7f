//! User service
//!
//! Builds commands from raw input and hands them to the repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use user_core::entities::{User, UserCommand};
use user_core::traits::UserRepository;
use user_core::value_objects::UserId;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate `name` and persist a new user
    async fn create_user(&self, name: &str) -> ServiceResult<()>;

    /// Load one user by ID
    async fn get_user(&self, id: UserId) -> ServiceResult<User>;

    /// Load every known user among `ids`
    async fn get_users(&self, ids: &[UserId]) -> ServiceResult<Vec<User>>;
}

/// Repository-backed user service
#[derive(Clone)]
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create a UserServiceImpl from the repositories held by `ctx`
    pub fn from_context(ctx: &ServiceContext) -> Self {
        Self::new(ctx.shared_user_repo())
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self))]
    async fn create_user(&self, name: &str) -> ServiceResult<()> {
        let cmd = UserCommand::create(name).map_err(ServiceError::validation)?;

        self.user_repo
            .create_user(&cmd)
            .await
            .map_err(ServiceError::repository)?;

        info!(user_id = %cmd.id(), "User created");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        self.user_repo
            .get_user(id)
            .await
            .map_err(ServiceError::repository)
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn get_users(&self, ids: &[UserId]) -> ServiceResult<Vec<User>> {
        self.user_repo
            .get_users(ids)
            .await
            .map_err(ServiceError::repository)
    }
}

//! User use cases

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use user_core::error::NotFoundError;

use crate::dto::{CreateUserInput, CreateUserOutput, GetUserInput, GetUserOutput};
use crate::services::UserService;

use super::error::{convert_service_to_usecase_error, UseCaseError, UseCaseErrorContext, UseCaseResult};

#[async_trait]
pub trait UserUseCase: Send + Sync {
    async fn create_user(&self, input: CreateUserInput) -> UseCaseResult<CreateUserOutput>;

    async fn get_user(&self, input: GetUserInput) -> UseCaseResult<GetUserOutput>;
}

/// Use cases backed by a [`UserService`]
#[derive(Clone)]
pub struct UserUseCaseImpl {
    user_service: Arc<dyn UserService>,
}

impl UserUseCaseImpl {
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}

#[async_trait]
impl UserUseCase for UserUseCaseImpl {
    #[instrument(skip(self))]
    async fn create_user(&self, input: CreateUserInput) -> UseCaseResult<CreateUserOutput> {
        self.user_service
            .create_user(&input.name)
            .await
            .map_err(convert_service_to_usecase_error)?;

        Ok(CreateUserOutput)
    }

    /// Every failure is reported as `NotFound`, whatever the service said
    #[instrument(skip(self))]
    async fn get_user(&self, input: GetUserInput) -> UseCaseResult<GetUserOutput> {
        match self.user_service.get_user(input.id).await {
            Ok(user) => Ok(GetUserOutput { user }),
            Err(err) => {
                debug!(service_context = %err.context(), "User lookup failed");
                Err(UseCaseError::new(
                    UseCaseErrorContext::NotFound,
                    NotFoundError::new("User", &input.id).with_inner(err),
                ))
            }
        }
    }
}

//! Use case facade - wires repository, service and use cases together
//!
//! The transport layer only ever sees this type.

use std::sync::Arc;

use user_db::{PgPool, PgUserRepository};

use crate::services::{ServiceContext, UserServiceImpl};
use crate::usecases::{UserUseCase, UserUseCaseImpl};

/// Every use case the application exposes
#[derive(Clone)]
pub struct UseCaseFacade {
    ctx: ServiceContext,
    user: Arc<dyn UserUseCase>,
}

impl UseCaseFacade {
    /// Build the PostgreSQL-backed chain: repository -> service -> use case
    pub fn new(pool: PgPool) -> Self {
        Self::from_context(ServiceContext::new(Arc::new(PgUserRepository::new(pool))))
    }

    /// Build the chain on top of whatever repositories `ctx` holds
    pub fn from_context(ctx: ServiceContext) -> Self {
        let user_service = Arc::new(UserServiceImpl::from_context(&ctx));
        let user = Arc::new(UserUseCaseImpl::new(user_service));
        Self { ctx, user }
    }

    /// Get the user use cases
    pub fn user(&self) -> &dyn UserUseCase {
        self.user.as_ref()
    }

    /// Get the service context the chain was built from
    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }
}

impl std::fmt::Debug for UseCaseFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UseCaseFacade")
            .field("ctx", &self.ctx)
            .field("user", &"dyn UserUseCase")
            .finish()
    }
}

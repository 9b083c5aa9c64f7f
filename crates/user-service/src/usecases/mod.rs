//! Use cases
//!
//! Entry points called by the transport layer. Each one drives a domain
//! service and classifies its failures as [`UseCaseError`]s.

pub mod error;
pub mod user;

pub use error::{convert_service_to_usecase_error, UseCaseError, UseCaseErrorContext, UseCaseResult};
pub use user::{UserUseCase, UserUseCaseImpl};

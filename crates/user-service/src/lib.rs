//! # user-service
//!
//! Application layer: the domain service that talks to the repository, the
//! use cases that drive it, their input/output DTOs, and the facade that
//! wires everything together.
//!
//! Errors climb one layer at a time:
//! `RepositoryError` -> [`ServiceError`] -> [`UseCaseError`].

pub mod dto;
pub mod facade;
pub mod services;
pub mod usecases;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dto::{CreateUserInput, CreateUserOutput, GetUserInput, GetUserOutput};
pub use facade::UseCaseFacade;
pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceErrorContext, ServiceResult,
    UserService, UserServiceImpl,
};
pub use usecases::{
    convert_service_to_usecase_error, UseCaseError, UseCaseErrorContext, UseCaseResult,
    UserUseCase, UserUseCaseImpl,
};

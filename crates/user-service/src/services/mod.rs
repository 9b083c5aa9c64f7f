//! Domain services
//!
//! Services own the repository calls and turn model/repository failures
//! into [`ServiceError`]s.

pub mod context;
pub mod error;
pub mod user;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceErrorContext, ServiceResult};
pub use user::{UserService, UserServiceImpl};

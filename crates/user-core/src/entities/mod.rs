//! Domain models
//!
//! The write side (`UserCommand`) and the read side (`User`) are kept apart:
//! commands are validated aggregates, queries are plain data.

mod user;
mod user_command;

pub use user::User;
pub use user_command::UserCommand;

//! Command/model mappers
//!
//! - `From<Model> for User`: convert database rows to the read projection
//! - `*Insert` structs: prepare command data for database writes

mod user;

pub use user::UserInsert;

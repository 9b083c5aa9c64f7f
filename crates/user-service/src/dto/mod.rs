//! Data Transfer Objects
//!
//! Inputs and outputs of the use cases.

mod inputs;
mod outputs;

pub use inputs::{CreateUserInput, GetUserInput};
pub use outputs::{CreateUserOutput, GetUserOutput};

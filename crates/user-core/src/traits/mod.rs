//! Domain traits (ports)

mod repositories;

pub use repositories::{RepoResult, UserRepository};

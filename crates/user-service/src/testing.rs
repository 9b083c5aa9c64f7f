//! In-memory repositories for tests
//!
//! Compiled for this crate's unit tests and, through the `testing`
//! feature, for downstream crates that need a [`UserRepository`] without
//! a database.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use user_core::entities::{User, UserCommand};
use user_core::error::RepositoryError;
use user_core::traits::{RepoResult, UserRepository};
use user_core::value_objects::UserId;

/// Repository backed by a HashMap, upserting like the PostgreSQL one
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored user, in no particular order
    pub fn snapshot(&self) -> Vec<User> {
        self.users().values().cloned().collect()
    }

    // A test that panicked mid-insert leaves the map usable
    fn users(&self) -> MutexGuard<'_, HashMap<UserId, User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, cmd: &UserCommand) -> RepoResult<()> {
        let id = cmd.id();
        self.users()
            .insert(id, User::new(id.into_inner(), cmd.name().as_str()));
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> RepoResult<User> {
        self.users()
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::with_message("no rows returned", "no rows"))
    }

    async fn get_users(&self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        let users = self.users();
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }
}

/// Repository whose every call fails as if the database were down
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingUserRepository;

fn connection_refused() -> RepositoryError {
    RepositoryError::new(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create_user(&self, _cmd: &UserCommand) -> RepoResult<()> {
        Err(connection_refused())
    }

    async fn get_user(&self, _id: UserId) -> RepoResult<User> {
        Err(connection_refused())
    }

    async fn get_users(&self, _ids: &[UserId]) -> RepoResult<Vec<User>> {
        Err(connection_refused())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_lookup_by_id() {
        let repo = InMemoryUserRepository::new();
        let cmd = UserCommand::create("Alice").unwrap();
        repo.create_user(&cmd).await.unwrap();

        let user = repo.get_user(cmd.id()).await.unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.id, cmd.id().into_inner());
        assert!(repo.get_user(UserId::new()).await.is_err());
    }

    #[tokio::test]
    async fn test_in_memory_survives_poisoned_lock() {
        let repo = std::sync::Arc::new(InMemoryUserRepository::new());
        let cloned = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = cloned.users.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let cmd = UserCommand::create("Bob").unwrap();
        repo.create_user(&cmd).await.unwrap();
        assert_eq!(repo.snapshot().len(), 1);
    }
}

//! User command/projection <-> model mapper

use chrono::{DateTime, Utc};
use uuid::Uuid;

use user_core::entities::{User, UserCommand};

use crate::models::UserModel;

/// Convert UserModel to the User projection
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::new(model.id, model.name)
    }
}

/// Borrowed column values for an upsert into `users`
#[derive(Debug)]
pub struct UserInsert<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> UserInsert<'a> {
    pub fn new(cmd: &'a UserCommand) -> Self {
        Self {
            id: cmd.id().into_inner(),
            name: cmd.name().as_str(),
            created_at: cmd.created_at(),
            updated_at: cmd.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_to_user_drops_timestamps() {
        let now = Utc::now();
        let model = UserModel {
            id: Uuid::new_v4(),
            name: "Bob".to_string(),
            created_at: now,
            updated_at: now,
        };
        let id = model.id;

        let user = User::from(model);
        assert_eq!(user, User::new(id, "Bob"));
    }

    #[test]
    fn test_insert_borrows_command() {
        let cmd = UserCommand::create("Bob").unwrap();
        let insert = UserInsert::new(&cmd);

        assert_eq!(insert.id, cmd.id().into_inner());
        assert_eq!(insert.name, "Bob");
        assert_eq!(insert.created_at, cmd.created_at());
        assert_eq!(insert.updated_at, cmd.updated_at());
    }
}

//! Credentials and role factories for authentication tests.
//!
//! Password hashing lives in the server crate, so callers pass an already hashed
//! value to `CredentialsFactory::password_hash`.

use crate::factory::helpers::next_id;
use entity::user_role::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CredentialsFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    login: String,
    password_hash: String,
}

impl<'a> CredentialsFactory<'a> {
    /// Creates a new CredentialsFactory for the given user.
    ///
    /// Defaults:
    /// - login: `"user{id}"` where id is auto-incremented
    /// - password_hash: a value no password will ever hash to
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            login: format!("user{}", id),
            password_hash: "00$00".to_string(),
        }
    }

    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub async fn build(self) -> Result<entity::credentials::Model, DbErr> {
        entity::credentials::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            login: ActiveValue::Set(self.login),
            password_hash: ActiveValue::Set(self.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Grants a role to a user.
pub async fn create_user_role(
    db: &DatabaseConnection,
    user_id: i32,
    role: Role,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role),
        ..Default::default()
    }
    .insert(db)
    .await
}

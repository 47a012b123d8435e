//! Access token sessions.
//!
//! Tokens are looked up by their SHA-256 digest; the plain token never reaches the
//! database.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a session for a token digest.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the token
    /// - `token_hash` - SHA-256 hex digest of the token
    /// - `created_at` - Issue time
    /// - `expires_at` - Time after which the token is rejected
    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            created_at: ActiveValue::Set(created_at),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a session for the digest that has not expired at `now`.
    pub async fn find_active(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::TokenHash.eq(token_hash))
            .filter(entity::session::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Revokes a token.
    ///
    /// # Returns
    /// - `Ok(true)` - Session removed
    /// - `Ok(false)` - No session for this digest
    pub async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::TokenHash.eq(token_hash))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes sessions that expired at or before `now`, returning how many were removed.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

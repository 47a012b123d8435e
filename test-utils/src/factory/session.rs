//! Access token session factory.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Stores a session for a token digest expiring `ttl` from now.
///
/// A negative `ttl` yields an already expired session.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
    token_hash: impl Into<String>,
    ttl: Duration,
) -> Result<entity::session::Model, DbErr> {
    let now = Utc::now();

    entity::session::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        token_hash: ActiveValue::Set(token_hash.into()),
        created_at: ActiveValue::Set(now),
        expires_at: ActiveValue::Set(now + ttl),
        ..Default::default()
    }
    .insert(db)
    .await
}

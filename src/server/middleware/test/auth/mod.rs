use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use entity::user_role::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    util::password::hash_token,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

/// Creates a user with credentials, the given roles and an active session for `token`.
async fn signed_in_user(
    db: &DatabaseConnection,
    token: &str,
    roles: &[Role],
) -> Result<entity::user::Model, AppError> {
    let user = factory::create_user(db).await?;
    factory::credentials::CredentialsFactory::new(db, user.user_id)
        .build()
        .await?;
    for role in roles {
        factory::credentials::create_user_role(db, user.user_id, *role).await?;
    }
    factory::create_session(db, user.user_id, hash_token(token), Duration::hours(1)).await?;

    Ok(user)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::AuthUser,
    util::password::hash_token,
};

pub enum Permission {
    /// Requires the admin role.
    Admin,
    /// Requires the admin or teacher role.
    Staff,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the bearer token of the request and checks every permission.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Authenticated user holding all permissions
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Unknown or expired token
    /// - `Err(AuthError::UserNotInDatabase)` - Token owner no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(session) = SessionRepository::new(self.db)
            .find_active(&hash_token(token), Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_auth_user(session.user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(session.user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.user_id,
                            "User attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Staff => {
                    if !user.is_staff() {
                        return Err(AuthError::AccessDenied(
                            user.user_id,
                            "User attempted a staff action without the admin or teacher role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

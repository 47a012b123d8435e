use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("Request has no bearer token")]
    MissingToken,

    /// The presented token is unknown, revoked or expired.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// Login failed because the login is unknown or the password does not match.
    #[error("Invalid login or password for '{0}'")]
    InvalidCredentials(String),

    /// A session references a user that no longer exists.
    #[error("User {0} referenced by session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks the required role.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - Missing, invalid or orphaned token, or failed login
/// - 403 Forbidden - Authenticated user without the required role
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Invalid login or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

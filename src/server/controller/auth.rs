use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthUserDto, CurrentUserDto, LoginDto, LoginResponseDto, RegisterDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{bearer_token, AuthGuard, Permission},
        model::user::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Sign in with login and password.
///
/// Issues a bearer token valid for the configured lifetime. Only the token's
/// digest is stored, so the returned value cannot be recovered later.
///
/// # Returns
/// - `200 OK` - Access token and the signed-in user
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Unknown login or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = LoginResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid login or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let result = service
        .login(LoginParams::from_dto(payload), state.token_ttl)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Create a user who can sign in.
///
/// # Access Control
/// - `Admin` - Only admins can register users
///
/// # Returns
/// - `201 Created` - Created user
/// - `400 Bad Request` - Empty login or password
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
/// - `409 Conflict` - Login already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User created", body = AuthUserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Login already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = AuthService::new(&state.db);

    let user = service.register(RegisterParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get the user the presented token belongs to.
#[utoipa::path(
    get,
    path = "/api/auth/check",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = CurrentUserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_current_dto())))
}

/// Revoke the presented token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Token revoked"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let token = bearer_token(&headers).ok_or(AuthError::MissingToken)?;

    AuthService::new(&state.db).logout(token).await?;

    Ok(StatusCode::NO_CONTENT)
}

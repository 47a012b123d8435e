use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        subject::{CreateSubjectDto, SubjectDto, UpdateSubjectDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::subject::{CreateSubjectParams, Subject, UpdateSubjectParams},
        service::subject::SubjectService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping subject endpoints in OpenAPI documentation
pub static SUBJECT_TAG: &str = "subjects";

/// Create a subject.
///
/// # Access Control
/// - `Admin` - Only admins can create subjects
#[utoipa::path(
    post,
    path = "/api/subjects",
    tag = SUBJECT_TAG,
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = SubjectDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let subject = SubjectService::new(&state.db)
        .create(CreateSubjectParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(subject.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/subjects",
    tag = SUBJECT_TAG,
    responses(
        (status = 200, description = "Subjects ordered by name", body = Vec<SubjectDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let subjects = SubjectService::new(&state.db).get_all().await?;

    let dtos: Vec<SubjectDto> = subjects.into_iter().map(Subject::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/subjects/{id}",
    tag = SUBJECT_TAG,
    params(("id" = i32, Path, description = "Subject ID")),
    responses(
        (status = 200, description = "Subject", body = SubjectDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_subject_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let subject = SubjectService::new(&state.db).get_by_id(id).await?;

    match subject {
        Some(subject) => Ok((StatusCode::OK, Json(subject.into_dto()))),
        None => Err(AppError::NotFound("Subject not found".to_string())),
    }
}

/// Rename a subject.
///
/// # Access Control
/// - `Admin` - Only admins can update subjects
#[utoipa::path(
    put,
    path = "/api/subjects/{id}",
    tag = SUBJECT_TAG,
    params(("id" = i32, Path, description = "Subject ID")),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated", body = SubjectDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let subject = SubjectService::new(&state.db)
        .update(UpdateSubjectParams::from_dto(id, payload))
        .await?;

    match subject {
        Some(subject) => Ok((StatusCode::OK, Json(subject.into_dto()))),
        None => Err(AppError::NotFound("Subject not found".to_string())),
    }
}

/// Delete a subject together with the assignments teaching it.
///
/// # Access Control
/// - `Admin` - Only admins can delete subjects
#[utoipa::path(
    delete,
    path = "/api/subjects/{id}",
    tag = SUBJECT_TAG,
    params(("id" = i32, Path, description = "Subject ID")),
    responses(
        (status = 204, description = "Subject deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if SubjectService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Subject not found".to_string()))
    }
}

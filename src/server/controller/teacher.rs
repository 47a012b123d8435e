use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        teacher::{CreateTeacherDto, TeacherDto, UpdateTeacherDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::teacher::{CreateTeacherParams, Teacher, UpdateTeacherParams},
        service::teacher::TeacherService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teachers";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherListQuery {
    pub group_id: Option<i32>,
}

/// Create a teacher.
///
/// When both `login` and `password` are supplied the teacher also gets
/// credentials and the teacher role, and can mark attendance.
///
/// # Access Control
/// - `Admin` - Only admins can create teachers
///
/// # Returns
/// - `201 Created` - Created teacher
/// - `400 Bad Request` - Blank name, or only one of login/password
/// - `409 Conflict` - Same full name already exists, or login taken
#[utoipa::path(
    post,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = TeacherDto),
        (status = 400, description = "Invalid teacher data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Duplicate full name or login", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = TeacherService::new(&state.db);

    let teacher = service.create(CreateTeacherParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(teacher.into_dto())))
}

/// List teachers ordered by full name.
///
/// With `groupId`, only teachers holding an assignment in that group.
#[utoipa::path(
    get,
    path = "/api/teachers",
    tag = TEACHER_TAG,
    params(
        ("groupId" = Option<i32>, Query, description = "Only teachers of this group")
    ),
    responses(
        (status = 200, description = "Teachers", body = Vec<TeacherDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_teachers(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<TeacherListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let teachers = TeacherService::new(&state.db)
        .get_all(query.group_id)
        .await?;

    let dtos: Vec<TeacherDto> = teachers.into_iter().map(Teacher::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher", body = TeacherDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let teacher = TeacherService::new(&state.db).get_by_id(id).await?;

    match teacher {
        Some(teacher) => Ok((StatusCode::OK, Json(teacher.into_dto()))),
        None => Err(AppError::NotFound("Teacher not found".to_string())),
    }
}

/// Update name parts of a teacher. Omitted fields are kept.
///
/// # Access Control
/// - `Admin` - Only admins can update teachers
#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = TeacherDto),
        (status = 400, description = "Invalid teacher data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 409, description = "Duplicate full name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let teacher = TeacherService::new(&state.db)
        .update(UpdateTeacherParams::from_dto(id, payload))
        .await?;

    match teacher {
        Some(teacher) => Ok((StatusCode::OK, Json(teacher.into_dto()))),
        None => Err(AppError::NotFound("Teacher not found".to_string())),
    }
}

/// Delete a teacher together with their assignments and lessons.
///
/// # Access Control
/// - `Admin` - Only admins can delete teachers
#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    tag = TEACHER_TAG,
    params(("id" = i32, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted = TeacherService::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Teacher not found".to_string()))
    }
}

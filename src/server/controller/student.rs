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
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::student::{CreateStudentParams, Student, UpdateStudentParams},
        service::student::StudentService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "students";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentListQuery {
    pub group_id: Option<i32>,
}

/// Create a student in an existing group.
///
/// # Access Control
/// - `Admin` - Only admins can create students
///
/// # Returns
/// - `201 Created` - Created student
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - Group not found
/// - `409 Conflict` - Same full name already exists
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 409, description = "Duplicate full name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = StudentService::new(&state.db);

    let student = service.create(CreateStudentParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// List students ordered by full name, optionally of one group.
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(
        ("groupId" = Option<i32>, Query, description = "Only students of this group")
    ),
    responses(
        (status = 200, description = "Students", body = Vec<StudentDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<StudentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let students = StudentService::new(&state.db)
        .get_all(query.group_id)
        .await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student", body = StudentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let student = StudentService::new(&state.db).get_by_id(id).await?;

    match student {
        Some(student) => Ok((StatusCode::OK, Json(student.into_dto()))),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Update name parts or the group of a student. Omitted fields are kept.
///
/// # Access Control
/// - `Admin` - Only admins can update students
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Student or group not found", body = ErrorDto),
        (status = 409, description = "Duplicate full name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let student = StudentService::new(&state.db)
        .update(UpdateStudentParams::from_dto(id, payload))
        .await?;

    match student {
        Some(student) => Ok((StatusCode::OK, Json(student.into_dto()))),
        None => Err(AppError::NotFound("Student not found".to_string())),
    }
}

/// Delete a student together with their attendance records.
///
/// # Access Control
/// - `Admin` - Only admins can delete students
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted = StudentService::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Student not found".to_string()))
    }
}

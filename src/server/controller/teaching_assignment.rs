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
        teaching_assignment::{
            CreateTeachingAssignmentDto, TeachingAssignmentDto, UpdateTeachingAssignmentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::teaching_assignment::{
            CreateTeachingAssignmentParams, TeachingAssignment, TeachingAssignmentFilter,
            UpdateTeachingAssignmentParams,
        },
        service::teaching_assignment::TeachingAssignmentService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping teaching assignment endpoints in OpenAPI documentation
pub static TEACHING_ASSIGNMENT_TAG: &str = "teaching-assignments";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingAssignmentListQuery {
    pub teacher_id: Option<i32>,
    pub group_id: Option<i32>,
}

/// Assign a teacher to teach a subject to a group in a semester.
///
/// # Access Control
/// - `Admin` - Only admins can create assignments
///
/// # Returns
/// - `201 Created` - Created assignment
/// - `400 Bad Request` - Non-positive id or semester outside 1..=12
/// - `404 Not Found` - Teacher, group or subject not found
/// - `409 Conflict` - Same assignment already exists
#[utoipa::path(
    post,
    path = "/api/teaching-assignments",
    tag = TEACHING_ASSIGNMENT_TAG,
    request_body = CreateTeachingAssignmentDto,
    responses(
        (status = 201, description = "Assignment created", body = TeachingAssignmentDto),
        (status = 400, description = "Invalid assignment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teacher, group or subject not found", body = ErrorDto),
        (status = 409, description = "Assignment already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_teaching_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateTeachingAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let assignment = TeachingAssignmentService::new(&state.db)
        .create(CreateTeachingAssignmentParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

/// List assignments ordered by id, filtered by teacher and/or group.
#[utoipa::path(
    get,
    path = "/api/teaching-assignments",
    tag = TEACHING_ASSIGNMENT_TAG,
    params(
        ("teacherId" = Option<i32>, Query, description = "Only assignments of this teacher"),
        ("groupId" = Option<i32>, Query, description = "Only assignments of this group")
    ),
    responses(
        (status = 200, description = "Assignments", body = Vec<TeachingAssignmentDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_teaching_assignments(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<TeachingAssignmentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let assignments = TeachingAssignmentService::new(&state.db)
        .get_all(TeachingAssignmentFilter {
            teacher_id: query.teacher_id,
            group_id: query.group_id,
        })
        .await?;

    let dtos: Vec<TeachingAssignmentDto> = assignments
        .into_iter()
        .map(TeachingAssignment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/teaching-assignments/{id}",
    tag = TEACHING_ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Teaching assignment ID")),
    responses(
        (status = 200, description = "Assignment", body = TeachingAssignmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_teaching_assignment_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let assignment = TeachingAssignmentService::new(&state.db)
        .get_by_id(id)
        .await?;

    match assignment {
        Some(assignment) => Ok((StatusCode::OK, Json(assignment.into_dto()))),
        None => Err(AppError::NotFound(
            "Teaching assignment not found".to_string(),
        )),
    }
}

/// Change fields of an assignment. The merged assignment is validated as on create.
///
/// # Access Control
/// - `Admin` - Only admins can update assignments
#[utoipa::path(
    put,
    path = "/api/teaching-assignments/{id}",
    tag = TEACHING_ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Teaching assignment ID")),
    request_body = UpdateTeachingAssignmentDto,
    responses(
        (status = 200, description = "Assignment updated", body = TeachingAssignmentDto),
        (status = 400, description = "Invalid assignment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Assignment, teacher, group or subject not found", body = ErrorDto),
        (status = 409, description = "Assignment already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_teaching_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateTeachingAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let assignment = TeachingAssignmentService::new(&state.db)
        .update(UpdateTeachingAssignmentParams::from_dto(id, payload))
        .await?;

    match assignment {
        Some(assignment) => Ok((StatusCode::OK, Json(assignment.into_dto()))),
        None => Err(AppError::NotFound(
            "Teaching assignment not found".to_string(),
        )),
    }
}

/// Delete an assignment together with its lessons and their attendance.
///
/// # Access Control
/// - `Admin` - Only admins can delete assignments
#[utoipa::path(
    delete,
    path = "/api/teaching-assignments/{id}",
    tag = TEACHING_ASSIGNMENT_TAG,
    params(("id" = i32, Path, description = "Teaching assignment ID")),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_teaching_assignment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if TeachingAssignmentService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Teaching assignment not found".to_string(),
        ))
    }
}

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        group::{
            CreateGroupDto, GroupAttendanceSummaryDto, GroupDetailsDto, GroupDto,
            GroupStudentAttendanceDto, GroupTeacherDto, UpdateGroupDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            attendance::StudentAttendance,
            group::{CreateGroupParams, Group, GroupTeacher, UpdateGroupParams},
        },
        service::group::GroupService,
        state::AppState,
        util::extract::{ApiJson, ApiPath},
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "groups";

fn group_not_found() -> AppError {
    AppError::NotFound("Group not found".to_string())
}

/// Create a group.
///
/// `name` and `specialty` default to empty strings and `course` to 1.
///
/// # Access Control
/// - `Admin` - Only admins can create groups
///
/// # Returns
/// - `201 Created` - Created group
/// - `400 Bad Request` - Empty or over 15 character code, course outside 1..=6,
///   year of entry outside 2000..=2100
/// - `409 Conflict` - Code already used
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Group code already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let group = GroupService::new(&state.db)
        .create(CreateGroupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// List groups ordered by code, each with its students.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Groups", body = Vec<GroupDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let groups = GroupService::new(&state.db).get_all().await?;

    let dtos: Vec<GroupDto> = groups.into_iter().map(Group::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group with its students", body = GroupDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_group_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let group = GroupService::new(&state.db).get_by_id(id).await?;

    match group {
        Some(group) => Ok((StatusCode::OK, Json(group.into_dto()))),
        None => Err(group_not_found()),
    }
}

/// Update fields of a group. Omitted fields are kept; provided ones are
/// validated as on create.
///
/// # Access Control
/// - `Admin` - Only admins can update groups
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 409, description = "Group code already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let group = GroupService::new(&state.db)
        .update(UpdateGroupParams::from_dto(id, payload))
        .await?;

    match group {
        Some(group) => Ok((StatusCode::OK, Json(group.into_dto()))),
        None => Err(group_not_found()),
    }
}

/// Delete a group together with its students, assignments and lessons.
///
/// # Access Control
/// - `Admin` - Only admins can delete groups
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if GroupService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(group_not_found())
    }
}

/// Get a group with teachers, subjects, assignments and attendance statistics.
///
/// Statistics cover the group's lessons attended by its current students:
/// `average` is the mean of student percentages and `byMonth` the share of
/// present records per `YYYY-MM`.
#[utoipa::path(
    get,
    path = "/api/groups/{id}/details",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group details", body = GroupDetailsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_group_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let details = GroupService::new(&state.db).details(id).await?;

    match details {
        Some(details) => Ok((StatusCode::OK, Json(details.into_dto()))),
        None => Err(group_not_found()),
    }
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}/teachers",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Distinct teachers with their subjects", body = Vec<GroupTeacherDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_group_teachers(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Some(teachers) = GroupService::new(&state.db).teachers(id).await? else {
        return Err(group_not_found());
    };

    let dtos: Vec<GroupTeacherDto> = teachers.into_iter().map(GroupTeacher::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}/students",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Students with attendance percentage", body = Vec<GroupStudentAttendanceDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_group_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let Some(students) = GroupService::new(&state.db)
        .students_with_attendance(id)
        .await?
    else {
        return Err(group_not_found());
    };

    let dtos: Vec<GroupStudentAttendanceDto> = students
        .into_iter()
        .map(StudentAttendance::into_percentage_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the attendance summary of a group.
///
/// Every current student gets a row, including those without records.
#[utoipa::path(
    get,
    path = "/api/groups/{id}/attendance",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Attendance summary", body = GroupAttendanceSummaryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_group_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let summary = GroupService::new(&state.db).attendance_summary(id).await?;

    match summary {
        Some(summary) => Ok((StatusCode::OK, Json(summary.into_dto()))),
        None => Err(group_not_found()),
    }
}

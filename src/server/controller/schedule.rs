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
        schedule::{CreateScheduleDto, GroupScheduleDto, ScheduleDto, UpdateScheduleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::schedule::{CreateScheduleParams, ScheduleEntry, UpdateScheduleParams},
        service::schedule::ScheduleService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleListQuery {
    pub teaching_assignment_id: Option<i32>,
}

#[derive(Deserialize)]
pub struct GroupScheduleQuery {
    /// `YYYY-MM`
    pub month: Option<String>,
    /// `YYYY`
    pub year: Option<String>,
}

/// Schedule a lesson.
///
/// A group can have only one lesson per date and lesson number, across all of
/// its assignments.
///
/// # Access Control
/// - `Admin` - Only admins can edit the schedule
///
/// # Returns
/// - `201 Created` - Created lesson
/// - `400 Bad Request` - Malformed date or lesson number outside 1..=12
/// - `404 Not Found` - Teaching assignment not found
/// - `409 Conflict` - The group's slot is taken
#[utoipa::path(
    post,
    path = "/api/schedule",
    tag = SCHEDULE_TAG,
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Lesson scheduled", body = ScheduleDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Teaching assignment not found", body = ErrorDto),
        (status = 409, description = "Slot already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let entry = ScheduleService::new(&state.db)
        .create(CreateScheduleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// List lessons ordered by date and lesson number.
#[utoipa::path(
    get,
    path = "/api/schedule",
    tag = SCHEDULE_TAG,
    params(
        ("teachingAssignmentId" = Option<i32>, Query, description = "Only lessons of this assignment")
    ),
    responses(
        (status = 200, description = "Lessons", body = Vec<ScheduleDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<ScheduleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let entries = ScheduleService::new(&state.db)
        .get_all(query.teaching_assignment_id)
        .await?;

    let dtos: Vec<ScheduleDto> = entries.into_iter().map(ScheduleEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 200, description = "Lesson", body = ScheduleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_schedule_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let entry = ScheduleService::new(&state.db).get_by_id(id).await?;

    match entry {
        Some(entry) => Ok((StatusCode::OK, Json(entry.into_dto()))),
        None => Err(AppError::NotFound("Schedule entry not found".to_string())),
    }
}

/// Move or reassign a lesson. Omitted fields are kept.
///
/// # Access Control
/// - `Admin` - Only admins can edit the schedule
#[utoipa::path(
    put,
    path = "/api/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    request_body = UpdateScheduleDto,
    responses(
        (status = 200, description = "Lesson updated", body = ScheduleDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Schedule entry or teaching assignment not found", body = ErrorDto),
        (status = 409, description = "Slot already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    let entry = ScheduleService::new(&state.db)
        .update(UpdateScheduleParams::from_dto(id, payload))
        .await?;

    match entry {
        Some(entry) => Ok((StatusCode::OK, Json(entry.into_dto()))),
        None => Err(AppError::NotFound("Schedule entry not found".to_string())),
    }
}

/// Delete a lesson together with its attendance records.
///
/// # Access Control
/// - `Admin` - Only admins can edit the schedule
#[utoipa::path(
    delete,
    path = "/api/schedule/{id}",
    tag = SCHEDULE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 204, description = "Lesson deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    if ScheduleService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Schedule entry not found".to_string()))
    }
}

/// Get a group's timetable.
///
/// Restricted to a month with `month=YYYY-MM` or a year with `year=YYYY`.
/// When both are given the month is used.
///
/// # Returns
/// - `200 OK` - Lessons ordered by date and lesson number, with weekday names
/// - `400 Bad Request` - Malformed month or year
/// - `404 Not Found` - Group not found
#[utoipa::path(
    get,
    path = "/api/schedule/groups/{group_id}",
    tag = SCHEDULE_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("month" = Option<String>, Query, description = "Month as YYYY-MM"),
        ("year" = Option<String>, Query, description = "Year as YYYY")
    ),
    responses(
        (status = 200, description = "Group timetable", body = GroupScheduleDto),
        (status = 400, description = "Malformed month or year", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_group_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(group_id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<GroupScheduleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let schedule = ScheduleService::new(&state.db)
        .group_schedule(group_id, query.month.as_deref(), query.year.as_deref())
        .await?;

    match schedule {
        Some(schedule) => Ok((StatusCode::OK, Json(schedule.into_dto()))),
        None => Err(AppError::NotFound("Group not found".to_string())),
    }
}

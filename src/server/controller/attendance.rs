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
        attendance::{AttendanceRecordDto, CreateAttendanceDto, JournalDto, UpdateAttendanceDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::attendance::{AttendanceRecord, Journal, JournalFilter, MarkAttendanceParams},
        service::attendance::AttendanceService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalQuery {
    pub group_id: Option<i32>,
    pub teaching_assignment_id: Option<i32>,
}

/// Mark attendance of students for a lesson.
///
/// Every listed student must belong to the group of the lesson and must not
/// have a record for it yet.
///
/// # Access Control
/// - `Staff` - Admins and teachers
///
/// # Returns
/// - `201 Created` - Created records
/// - `400 Bad Request` - Empty or duplicate student list, or a student outside the lesson's group
/// - `404 Not Found` - Lesson or student not found
/// - `409 Conflict` - A student already has a record for the lesson
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    request_body = CreateAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = Vec<AttendanceRecordDto>),
        (status = 400, description = "Invalid attendance data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or teacher", body = ErrorDto),
        (status = 404, description = "Lesson or student not found", body = ErrorDto),
        (status = 409, description = "Attendance already recorded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Staff])
        .await?;

    let records = AttendanceService::new(&state.db)
        .create(MarkAttendanceParams::from_create_dto(payload))
        .await?;

    let dtos: Vec<AttendanceRecordDto> = records
        .into_iter()
        .map(AttendanceRecord::into_dto)
        .collect();

    Ok((StatusCode::CREATED, Json(dtos)))
}

/// Set attendance of students for a lesson, creating missing records.
///
/// The path id is the lesson's schedule entry, not an attendance record.
///
/// # Access Control
/// - `Staff` - Admins and teachers
#[utoipa::path(
    patch,
    path = "/api/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID of the lesson")),
    request_body = UpdateAttendanceDto,
    responses(
        (status = 200, description = "Attendance saved", body = Vec<AttendanceRecordDto>),
        (status = 400, description = "Invalid attendance data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or teacher", body = ErrorDto),
        (status = 404, description = "Lesson or student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(schedule_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Staff])
        .await?;

    let records = AttendanceService::new(&state.db)
        .update(MarkAttendanceParams::from_update_dto(schedule_id, payload))
        .await?;

    let dtos: Vec<AttendanceRecordDto> = records
        .into_iter()
        .map(AttendanceRecord::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get attendance journals, one per teaching assignment.
///
/// Each journal lists the students with records for the assignment's lessons,
/// a date to status map per student and the share of lessons they were present at.
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    params(
        ("groupId" = Option<i32>, Query, description = "Only assignments of this group"),
        ("teachingAssignmentId" = Option<i32>, Query, description = "Only this assignment")
    ),
    responses(
        (status = 200, description = "Journals ordered by assignment", body = Vec<JournalDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_journals(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiQuery(query): ApiQuery<JournalQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let journals = AttendanceService::new(&state.db)
        .get_journals(JournalFilter {
            group_id: query.group_id,
            teaching_assignment_id: query.teaching_assignment_id,
        })
        .await?;

    let dtos: Vec<JournalDto> = journals.into_iter().map(Journal::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get the journal of the teaching assignment an attendance record belongs to.
#[utoipa::path(
    get,
    path = "/api/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance record ID")),
    responses(
        (status = 200, description = "Journal", body = JournalDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Attendance record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_journal_by_attendance_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let journal = AttendanceService::new(&state.db)
        .get_journal_by_attendance_id(id)
        .await?;

    match journal {
        Some(journal) => Ok((StatusCode::OK, Json(journal.into_dto()))),
        None => Err(AppError::NotFound(
            "Attendance record not found".to_string(),
        )),
    }
}

/// Delete a single attendance record.
///
/// # Access Control
/// - `Staff` - Admins and teachers
#[utoipa::path(
    delete,
    path = "/api/attendance/{id}",
    tag = ATTENDANCE_TAG,
    params(("id" = i32, Path, description = "Attendance record ID")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or teacher", body = ErrorDto),
        (status = 404, description = "Attendance record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Staff])
        .await?;

    if AttendanceService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Attendance record not found".to_string(),
        ))
    }
}

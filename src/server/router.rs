//! Route table and OpenAPI document.
//!
//! Handlers sharing a path are registered together with `routes!`, which also
//! collects their `utoipa::path` annotations into the served document.

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        attendance::{self, ATTENDANCE_TAG},
        auth::{self, AUTH_TAG},
        group::{self, GROUP_TAG},
        schedule::{self, SCHEDULE_TAG},
        student::{self, STUDENT_TAG},
        subject::{self, SUBJECT_TAG},
        teacher::{self, TEACHER_TAG},
        teaching_assignment::{self, TEACHING_ASSIGNMENT_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Academia API", description = "Academic administration backend"),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Sign in and token management"),
        (name = TEACHER_TAG, description = "Teachers"),
        (name = STUDENT_TAG, description = "Students"),
        (name = GROUP_TAG, description = "Groups, rosters and group statistics"),
        (name = SUBJECT_TAG, description = "Subjects"),
        (name = TEACHING_ASSIGNMENT_TAG, description = "Who teaches what to which group"),
        (name = SCHEDULE_TAG, description = "Lessons and group timetables"),
        (name = ATTENDANCE_TAG, description = "Attendance marking and journals")
    )
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by handler `security` attributes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::register))
        .routes(routes!(auth::check))
        .routes(routes!(auth::logout))
        .routes(routes!(teacher::create_teacher, teacher::get_teachers))
        .routes(routes!(
            teacher::get_teacher_by_id,
            teacher::update_teacher,
            teacher::delete_teacher
        ))
        .routes(routes!(student::create_student, student::get_students))
        .routes(routes!(
            student::get_student_by_id,
            student::update_student,
            student::delete_student
        ))
        .routes(routes!(group::create_group, group::get_groups))
        .routes(routes!(
            group::get_group_by_id,
            group::update_group,
            group::delete_group
        ))
        .routes(routes!(group::get_group_details))
        .routes(routes!(group::get_group_teachers))
        .routes(routes!(group::get_group_students))
        .routes(routes!(group::get_group_attendance))
        .routes(routes!(subject::create_subject, subject::get_subjects))
        .routes(routes!(
            subject::get_subject_by_id,
            subject::update_subject,
            subject::delete_subject
        ))
        .routes(routes!(
            teaching_assignment::create_teaching_assignment,
            teaching_assignment::get_teaching_assignments
        ))
        .routes(routes!(
            teaching_assignment::get_teaching_assignment_by_id,
            teaching_assignment::update_teaching_assignment,
            teaching_assignment::delete_teaching_assignment
        ))
        .routes(routes!(schedule::create_schedule, schedule::get_schedule))
        .routes(routes!(
            schedule::get_schedule_by_id,
            schedule::update_schedule,
            schedule::delete_schedule
        ))
        .routes(routes!(schedule::get_group_schedule))
        .routes(routes!(
            attendance::create_attendance,
            attendance::get_journals
        ))
        .routes(routes!(
            attendance::get_journal_by_attendance_id,
            attendance::update_attendance,
            attendance::delete_attendance
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}

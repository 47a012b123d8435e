//! Attendance record factory.

use entity::attendance::AttendanceStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks a student's status for a lesson.
pub async fn create_attendance(
    db: &DatabaseConnection,
    schedule_id: i32,
    student_id: i32,
    status: AttendanceStatus,
) -> Result<entity::attendance::Model, DbErr> {
    entity::attendance::ActiveModel {
        schedule_id: ActiveValue::Set(schedule_id),
        student_id: ActiveValue::Set(student_id),
        status: ActiveValue::Set(status),
        ..Default::default()
    }
    .insert(db)
    .await
}

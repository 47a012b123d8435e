use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatusDto {
    Present,
    Absent,
    Late,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatusDto {
    pub student_id: i32,
    pub status: AttendanceStatusDto,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendanceDto {
    pub schedule_id: i32,
    pub students: Vec<StudentStatusDto>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceDto {
    pub students: Vec<StudentStatusDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordDto {
    pub attendance_id: i32,
    pub schedule_id: i32,
    pub student_id: i32,
    pub status: AttendanceStatusDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentAttendanceDto {
    pub student_id: i32,
    pub full_name: String,
    /// Status per lesson date (`YYYY-MM-DD`).
    pub attendance: BTreeMap<String, AttendanceStatusDto>,
    pub percentage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalDto {
    pub teaching_assignment_id: i32,
    pub date_of_the_last_lesson: Option<String>,
    pub lesson_number: Option<i32>,
    pub subject_name: String,
    pub teacher_full_name: String,
    pub group_code: String,
    pub total_students: i32,
    pub students: Vec<StudentAttendanceDto>,
}

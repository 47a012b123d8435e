use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    attendance::StudentAttendanceDto, subject::SubjectDto,
    teaching_assignment::TeachingAssignmentDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupStudentDto {
    pub id: i32,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub group_id: i32,
    pub group_code: String,
    pub name: String,
    pub specialty: String,
    pub course: i32,
    pub year_of_entry: i32,
    pub students: Vec<GroupStudentDto>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupDto {
    pub group_code: String,
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub course: Option<i32>,
    pub year_of_entry: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupDto {
    pub group_code: Option<String>,
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub course: Option<i32>,
    pub year_of_entry: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupTeacherDto {
    pub teacher_id: i32,
    pub full_name: String,
    /// Names of the subjects this teacher teaches in the group.
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupStudentAttendanceDto {
    pub student_id: i32,
    pub full_name: String,
    pub attendance_percentage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatsDto {
    pub average: i32,
    /// Percentage per month (`YYYY-MM`).
    pub by_month: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetailsDto {
    pub group_id: i32,
    pub group_code: String,
    pub name: String,
    pub specialty: String,
    pub course: i32,
    pub year_of_entry: i32,
    pub students: Vec<GroupStudentDto>,
    pub teachers: Vec<GroupTeacherDto>,
    pub subjects: Vec<SubjectDto>,
    pub teaching_assignments: Vec<TeachingAssignmentDto>,
    pub attendance_stats: AttendanceStatsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupAttendanceSummaryDto {
    pub group_id: i32,
    pub group_code: String,
    pub total_students: i32,
    pub students: Vec<StudentAttendanceDto>,
    pub average_attendance: i32,
    pub total_lessons: i32,
    pub total_present: i32,
    pub total_absent: i32,
    pub total_late: i32,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub schedule_id: i32,
    pub teaching_assignment_id: i32,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub group_id: i32,
    pub group_code: String,
    pub subject_id: i32,
    pub subject_name: String,
    pub date: NaiveDate,
    pub lesson_number: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleDto {
    pub teaching_assignment_id: i32,
    pub date: NaiveDate,
    pub lesson_number: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleDto {
    pub teaching_assignment_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub lesson_number: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupScheduleEntryDto {
    pub id: i32,
    pub date: NaiveDate,
    /// English weekday name, e.g. `"Monday"`.
    pub day_of_week: String,
    pub lesson_number: i32,
    pub subject_name: String,
    pub teacher_name: String,
    pub teaching_assignment_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupScheduleDto {
    pub group_id: i32,
    pub group_code: String,
    pub schedule: Vec<GroupScheduleEntryDto>,
}

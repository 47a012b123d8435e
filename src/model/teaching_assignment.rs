use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentTeacherDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentGroupDto {
    pub id: i32,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSubjectDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeachingAssignmentDto {
    pub teaching_assignment_id: i32,
    pub semester: i32,
    pub teacher: AssignmentTeacherDto,
    pub group: AssignmentGroupDto,
    pub subject: AssignmentSubjectDto,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeachingAssignmentDto {
    pub teacher_id: i32,
    pub group_id: i32,
    pub subject_id: i32,
    pub semester: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeachingAssignmentDto {
    pub teacher_id: Option<i32>,
    pub group_id: Option<i32>,
    pub subject_id: Option<i32>,
    pub semester: Option<i32>,
}

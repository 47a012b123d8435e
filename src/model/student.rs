use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub student_id: i32,
    pub group_id: i32,
    pub group_code: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub surname: String,
    pub name: String,
    #[serde(default)]
    pub patronymic: String,
    pub group_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub group_id: Option<i32>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    pub teacher_id: i32,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

/// Login and password are optional; when both are given the teacher can sign in.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeacherDto {
    pub surname: String,
    pub name: String,
    #[serde(default)]
    pub patronymic: String,
    pub login: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeacherDto {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
}

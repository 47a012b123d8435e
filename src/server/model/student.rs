//! Student domain models and parameters.

use crate::{
    model::student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    server::util::name::full_name,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: i32,
    pub group_id: i32,
    pub group_code: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

impl Student {
    /// Converts entity models to a domain model at the repository boundary.
    pub fn from_entity(
        student: entity::student::Model,
        user: entity::user::Model,
        group: entity::group::Model,
    ) -> Self {
        Self {
            student_id: student.student_id,
            group_id: student.group_id,
            group_code: group.group_code,
            surname: user.surname,
            name: user.name,
            patronymic: user.patronymic,
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.surname, &self.name, &self.patronymic)
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            student_id: self.student_id,
            group_id: self.group_id,
            group_code: self.group_code,
            surname: self.surname,
            name: self.name,
            patronymic: self.patronymic,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub group_id: i32,
}

impl CreateStudentParams {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            surname: dto.surname,
            name: dto.name,
            patronymic: dto.patronymic,
            group_id: dto.group_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub student_id: i32,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub group_id: Option<i32>,
}

impl UpdateStudentParams {
    pub fn from_dto(student_id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            student_id,
            surname: dto.surname,
            name: dto.name,
            patronymic: dto.patronymic,
            group_id: dto.group_id,
        }
    }
}

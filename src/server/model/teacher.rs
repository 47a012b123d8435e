//! Teacher domain models and parameters.

use crate::{
    model::teacher::{CreateTeacherDto, TeacherDto, UpdateTeacherDto},
    server::util::name::full_name,
};

/// A teacher with the name parts of the backing user.
#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub teacher_id: i32,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

impl Teacher {
    /// Builds a teacher from the user row sharing its id.
    pub fn from_entity(user: entity::user::Model) -> Self {
        Self {
            teacher_id: user.user_id,
            surname: user.surname,
            name: user.name,
            patronymic: user.patronymic,
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.surname, &self.name, &self.patronymic)
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            teacher_id: self.teacher_id,
            surname: self.surname,
            name: self.name,
            patronymic: self.patronymic,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeacherParams {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub login: Option<String>,
    pub password: Option<String>,
}

impl CreateTeacherParams {
    pub fn from_dto(dto: CreateTeacherDto) -> Self {
        Self {
            surname: dto.surname,
            name: dto.name,
            patronymic: dto.patronymic,
            login: dto.login.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()),
            password: dto.password.filter(|p| !p.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTeacherParams {
    pub teacher_id: i32,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
}

impl UpdateTeacherParams {
    pub fn from_dto(teacher_id: i32, dto: UpdateTeacherDto) -> Self {
        Self {
            teacher_id,
            surname: dto.surname,
            name: dto.name,
            patronymic: dto.patronymic,
        }
    }
}

use crate::model::subject::{CreateSubjectDto, SubjectDto, UpdateSubjectDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub subject_id: i32,
    pub name: String,
}

impl Subject {
    pub fn from_entity(entity: entity::subject::Model) -> Self {
        Self {
            subject_id: entity.subject_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> SubjectDto {
        SubjectDto {
            subject_id: self.subject_id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSubjectParams {
    pub name: String,
}

impl CreateSubjectParams {
    pub fn from_dto(dto: CreateSubjectDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSubjectParams {
    pub subject_id: i32,
    pub name: Option<String>,
}

impl UpdateSubjectParams {
    pub fn from_dto(subject_id: i32, dto: UpdateSubjectDto) -> Self {
        Self {
            subject_id,
            name: dto.name,
        }
    }
}

//! Teaching assignment domain models and parameters.

use crate::{
    model::teaching_assignment::{
        AssignmentGroupDto, AssignmentSubjectDto, AssignmentTeacherDto,
        CreateTeachingAssignmentDto, TeachingAssignmentDto, UpdateTeachingAssignmentDto,
    },
    server::{model::teacher::Teacher, util::name::full_name},
};

/// A teaching assignment resolved with its teacher, group and subject.
#[derive(Debug, Clone, PartialEq)]
pub struct TeachingAssignment {
    pub teaching_assignment_id: i32,
    pub semester: i32,
    pub teacher: Teacher,
    pub group_id: i32,
    pub group_code: String,
    pub subject_id: i32,
    pub subject_name: String,
}

impl TeachingAssignment {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `assignment` - The teaching assignment row
    /// - `teacher_user` - User row of the assigned teacher
    /// - `group` - The taught group
    /// - `subject` - The taught subject
    pub fn from_entity(
        assignment: entity::teaching_assignment::Model,
        teacher_user: entity::user::Model,
        group: entity::group::Model,
        subject: entity::subject::Model,
    ) -> Self {
        Self {
            teaching_assignment_id: assignment.teaching_assignment_id,
            semester: assignment.semester,
            teacher: Teacher::from_entity(teacher_user),
            group_id: group.group_id,
            group_code: group.group_code,
            subject_id: subject.subject_id,
            subject_name: subject.name,
        }
    }

    pub fn teacher_full_name(&self) -> String {
        full_name(
            &self.teacher.surname,
            &self.teacher.name,
            &self.teacher.patronymic,
        )
    }

    pub fn into_dto(self) -> TeachingAssignmentDto {
        TeachingAssignmentDto {
            teaching_assignment_id: self.teaching_assignment_id,
            semester: self.semester,
            teacher: AssignmentTeacherDto {
                id: self.teacher.teacher_id,
                name: self.teacher.name,
                surname: self.teacher.surname,
            },
            group: AssignmentGroupDto {
                id: self.group_id,
                code: self.group_code,
            },
            subject: AssignmentSubjectDto {
                id: self.subject_id,
                name: self.subject_name,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTeachingAssignmentParams {
    pub teacher_id: i32,
    pub group_id: i32,
    pub subject_id: i32,
    pub semester: i32,
}

impl CreateTeachingAssignmentParams {
    pub fn from_dto(dto: CreateTeachingAssignmentDto) -> Self {
        Self {
            teacher_id: dto.teacher_id,
            group_id: dto.group_id,
            subject_id: dto.subject_id,
            semester: dto.semester,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UpdateTeachingAssignmentParams {
    pub teaching_assignment_id: i32,
    pub teacher_id: Option<i32>,
    pub group_id: Option<i32>,
    pub subject_id: Option<i32>,
    pub semester: Option<i32>,
}

impl UpdateTeachingAssignmentParams {
    pub fn from_dto(teaching_assignment_id: i32, dto: UpdateTeachingAssignmentDto) -> Self {
        Self {
            teaching_assignment_id,
            teacher_id: dto.teacher_id,
            group_id: dto.group_id,
            subject_id: dto.subject_id,
            semester: dto.semester,
        }
    }
}

/// Filters for listing assignments; `None` matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeachingAssignmentFilter {
    pub teacher_id: Option<i32>,
    pub group_id: Option<i32>,
}

//! Teaching assignment factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TeachingAssignmentFactory<'a> {
    db: &'a DatabaseConnection,
    teacher_id: i32,
    group_id: i32,
    subject_id: i32,
    semester: i32,
}

impl<'a> TeachingAssignmentFactory<'a> {
    /// Creates a new factory for the given teacher, group and subject in semester 1.
    pub fn new(db: &'a DatabaseConnection, teacher_id: i32, group_id: i32, subject_id: i32) -> Self {
        Self {
            db,
            teacher_id,
            group_id,
            subject_id,
            semester: 1,
        }
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = semester;
        self
    }

    pub async fn build(self) -> Result<entity::teaching_assignment::Model, DbErr> {
        entity::teaching_assignment::ActiveModel {
            teacher_id: ActiveValue::Set(self.teacher_id),
            group_id: ActiveValue::Set(self.group_id),
            subject_id: ActiveValue::Set(self.subject_id),
            semester: ActiveValue::Set(self.semester),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a semester 1 teaching assignment.
pub async fn create_teaching_assignment(
    db: &DatabaseConnection,
    teacher_id: i32,
    group_id: i32,
    subject_id: i32,
) -> Result<entity::teaching_assignment::Model, DbErr> {
    TeachingAssignmentFactory::new(db, teacher_id, group_id, subject_id)
        .build()
        .await
}

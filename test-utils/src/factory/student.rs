//! Student factory. Inserts the backing user row and the student row.

use crate::factory::user::UserFactory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    group_id: i32,
    user: UserFactory<'a>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory for a student of the given group.
    pub fn new(db: &'a DatabaseConnection, group_id: i32) -> Self {
        Self {
            db,
            group_id,
            user: UserFactory::new(db),
        }
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.user = self.user.surname(surname);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.user = self.user.name(name);
        self
    }

    pub fn patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.user = self.user.patronymic(patronymic);
        self
    }

    /// Inserts the user and student rows.
    ///
    /// # Returns
    /// - `Ok((user, student))` - Created entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::user::Model, entity::student::Model), DbErr> {
        let user = self.user.build().await?;
        let student = entity::student::ActiveModel {
            student_id: ActiveValue::Set(user.user_id),
            group_id: ActiveValue::Set(self.group_id),
        }
        .insert(self.db)
        .await?;

        Ok((user, student))
    }
}

/// Creates a student of the given group with default names.
pub async fn create_student(
    db: &DatabaseConnection,
    group_id: i32,
) -> Result<(entity::user::Model, entity::student::Model), DbErr> {
    StudentFactory::new(db, group_id).build().await
}

//! Teacher factory. Inserts the backing user row and the teacher row.

use crate::factory::user::UserFactory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating teachers with customizable names.
///
/// # Example
///
/// ```rust,ignore
/// let (user, teacher) = TeacherFactory::new(&db)
///     .surname("Petrov")
///     .build()
///     .await?;
/// ```
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    user: UserFactory<'a>,
}

impl<'a> TeacherFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
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

    /// Inserts the user and teacher rows.
    ///
    /// # Returns
    /// - `Ok((user, teacher))` - Created entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::user::Model, entity::teacher::Model), DbErr> {
        let user = self.user.build().await?;
        let teacher = entity::teacher::ActiveModel {
            teacher_id: ActiveValue::Set(user.user_id),
        }
        .insert(self.db)
        .await?;

        Ok((user, teacher))
    }
}

/// Creates a teacher with default names.
pub async fn create_teacher(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::teacher::Model), DbErr> {
    TeacherFactory::new(db).build().await
}

//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    group_code: String,
    name: String,
    specialty: String,
    course: i32,
    year_of_entry: i32,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - group_code: `"G-{id}"` where id is auto-incremented
    /// - name: `"Group {id}"`
    /// - specialty: `"09.03.01"`
    /// - course: `1`
    /// - year_of_entry: `2024`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            group_code: format!("G-{}", id),
            name: format!("Group {}", id),
            specialty: "09.03.01".to_string(),
            course: 1,
            year_of_entry: 2024,
        }
    }

    pub fn group_code(mut self, group_code: impl Into<String>) -> Self {
        self.group_code = group_code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn course(mut self, course: i32) -> Self {
        self.course = course;
        self
    }

    pub fn year_of_entry(mut self, year_of_entry: i32) -> Self {
        self.year_of_entry = year_of_entry;
        self
    }

    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            group_code: ActiveValue::Set(self.group_code),
            name: ActiveValue::Set(self.name),
            specialty: ActiveValue::Set(self.specialty),
            course: ActiveValue::Set(self.course),
            year_of_entry: ActiveValue::Set(self.year_of_entry),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}

//! Schedule entry factory.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    teaching_assignment_id: i32,
    date: NaiveDate,
    lesson_number: i32,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new factory for a lesson of the given teaching assignment.
    ///
    /// Defaults:
    /// - date: `2024-09-02`
    /// - lesson_number: `1`
    pub fn new(db: &'a DatabaseConnection, teaching_assignment_id: i32) -> Self {
        Self {
            db,
            teaching_assignment_id,
            date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap_or_default(),
            lesson_number: 1,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn lesson_number(mut self, lesson_number: i32) -> Self {
        self.lesson_number = lesson_number;
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            teaching_assignment_id: ActiveValue::Set(self.teaching_assignment_id),
            date: ActiveValue::Set(self.date),
            lesson_number: ActiveValue::Set(self.lesson_number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson on the given date in the given slot.
pub async fn create_schedule(
    db: &DatabaseConnection,
    teaching_assignment_id: i32,
    date: NaiveDate,
    lesson_number: i32,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, teaching_assignment_id)
        .date(date)
        .lesson_number(lesson_number)
        .build()
        .await
}

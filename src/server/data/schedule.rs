use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::teaching_assignment::TeachingAssignmentRepository,
    model::schedule::{CreateScheduleParams, ScheduleEntry, SchedulePeriod},
};

pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateScheduleParams,
    ) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            teaching_assignment_id: ActiveValue::Set(params.teaching_assignment_id),
            date: ActiveValue::Set(params.date),
            lesson_number: ActiveValue::Set(params.lesson_number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_model(
        &self,
        schedule_id: i32,
    ) -> Result<Option<entity::schedule::Model>, DbErr> {
        entity::prelude::Schedule::find_by_id(schedule_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_id(&self, schedule_id: i32) -> Result<Option<ScheduleEntry>, DbErr> {
        let Some(model) = self.find_model(schedule_id).await? else {
            return Ok(None);
        };

        Ok(self.resolve(vec![model]).await?.pop())
    }

    /// Finds a lesson occupying the group's slot on a date.
    ///
    /// # Arguments
    /// - `group_id` - Group whose timetable is checked
    /// - `date` - Lesson date
    /// - `lesson_number` - Lesson slot within the day
    /// - `exclude_id` - Lesson ignored by the check, used when moving an existing lesson
    pub async fn find_slot_conflict(
        &self,
        group_id: i32,
        date: NaiveDate,
        lesson_number: i32,
        exclude_id: Option<i32>,
    ) -> Result<Option<entity::schedule::Model>, DbErr> {
        let mut query = entity::prelude::Schedule::find()
            .inner_join(entity::prelude::TeachingAssignment)
            .filter(entity::teaching_assignment::Column::GroupId.eq(group_id))
            .filter(entity::schedule::Column::Date.eq(date))
            .filter(entity::schedule::Column::LessonNumber.eq(lesson_number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::schedule::Column::ScheduleId.ne(id));
        }

        query.one(self.db).await
    }

    /// Gets lessons ordered by date and lesson number.
    ///
    /// # Arguments
    /// - `teaching_assignment_id` - When set, only lessons of this assignment
    pub async fn get_all(
        &self,
        teaching_assignment_id: Option<i32>,
    ) -> Result<Vec<ScheduleEntry>, DbErr> {
        let mut query = entity::prelude::Schedule::find()
            .order_by_asc(entity::schedule::Column::Date)
            .order_by_asc(entity::schedule::Column::LessonNumber);

        if let Some(id) = teaching_assignment_id {
            query = query.filter(entity::schedule::Column::TeachingAssignmentId.eq(id));
        }

        let models = query.all(self.db).await?;

        self.resolve(models).await
    }

    /// Gets a group's lessons ordered by date and lesson number.
    ///
    /// # Arguments
    /// - `group_id` - Group whose lessons are returned
    /// - `period` - Optional inclusive date range
    pub async fn get_by_group(
        &self,
        group_id: i32,
        period: Option<SchedulePeriod>,
    ) -> Result<Vec<ScheduleEntry>, DbErr> {
        let mut query = entity::prelude::Schedule::find()
            .inner_join(entity::prelude::TeachingAssignment)
            .filter(entity::teaching_assignment::Column::GroupId.eq(group_id))
            .order_by_asc(entity::schedule::Column::Date)
            .order_by_asc(entity::schedule::Column::LessonNumber);

        if let Some(period) = period {
            query = query
                .filter(entity::schedule::Column::Date.gte(period.from))
                .filter(entity::schedule::Column::Date.lte(period.to));
        }

        let models = query.all(self.db).await?;

        self.resolve(models).await
    }

    /// Overwrites the assignment, date and lesson number of a lesson.
    pub async fn update(
        &self,
        model: entity::schedule::Model,
        values: CreateScheduleParams,
    ) -> Result<entity::schedule::Model, DbErr> {
        let mut active: entity::schedule::ActiveModel = model.into();
        active.teaching_assignment_id = ActiveValue::Set(values.teaching_assignment_id);
        active.date = ActiveValue::Set(values.date);
        active.lesson_number = ActiveValue::Set(values.lesson_number);

        active.update(self.db).await
    }

    /// Deletes a lesson; its attendance records cascade.
    pub async fn delete(&self, schedule_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Schedule::delete_by_id(schedule_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches resolved teaching assignments to lesson rows, keeping input order.
    async fn resolve(
        &self,
        models: Vec<entity::schedule::Model>,
    ) -> Result<Vec<ScheduleEntry>, DbErr> {
        let assignment_ids: Vec<i32> = models.iter().map(|m| m.teaching_assignment_id).collect();
        let assignments = TeachingAssignmentRepository::new(self.db)
            .get_by_ids(assignment_ids)
            .await?;

        Ok(models
            .into_iter()
            .filter_map(|model| {
                let assignment = assignments.get(&model.teaching_assignment_id)?.clone();
                Some(ScheduleEntry::from_entity(model, assignment))
            })
            .collect())
    }
}

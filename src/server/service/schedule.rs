//! Lessons and the group timetable.
//!
//! A group holds at most one lesson per date and lesson number. The check runs
//! against the group of the lesson's teaching assignment, so two assignments of
//! the same group cannot share a slot either.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attendance::AttendanceRepository, group::GroupRepository, schedule::ScheduleRepository,
        teaching_assignment::TeachingAssignmentRepository,
    },
    error::AppError,
    model::schedule::{
        CreateScheduleParams, GroupSchedule, ScheduleEntry, SchedulePeriod, UpdateScheduleParams,
    },
};

const LESSON_NUMBERS: std::ops::RangeInclusive<i32> = 1..=12;

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a lesson.
    ///
    /// # Returns
    /// - `Ok(ScheduleEntry)` - Created lesson
    /// - `Err(AppError::BadRequest)` - Lesson number out of range
    /// - `Err(AppError::NotFound)` - Teaching assignment not found
    /// - `Err(AppError::Conflict)` - The group already has a lesson in this slot
    pub async fn create(&self, params: CreateScheduleParams) -> Result<ScheduleEntry, AppError> {
        self.validate(params, None).await?;

        let repo = ScheduleRepository::new(self.db);
        let created = repo.create(params).await?;

        repo.find_by_id(created.schedule_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Schedule entry not found after creation".to_string())
            })
    }

    pub async fn get_all(
        &self,
        teaching_assignment_id: Option<i32>,
    ) -> Result<Vec<ScheduleEntry>, AppError> {
        Ok(ScheduleRepository::new(self.db)
            .get_all(teaching_assignment_id)
            .await?)
    }

    pub async fn get_by_id(&self, schedule_id: i32) -> Result<Option<ScheduleEntry>, AppError> {
        Ok(ScheduleRepository::new(self.db)
            .find_by_id(schedule_id)
            .await?)
    }

    /// Moves or reassigns a lesson; the merged slot is checked excluding the lesson itself.
    ///
    /// A lesson with attendance records stays within its group.
    ///
    /// # Returns
    /// - `Ok(Some(ScheduleEntry))` - Updated lesson
    /// - `Ok(None)` - Lesson not found
    /// - `Err(AppError::Conflict)` - Reassigned to another group while attendance exists
    /// - `Err(AppError)` - Same errors as `create`
    pub async fn update(
        &self,
        params: UpdateScheduleParams,
    ) -> Result<Option<ScheduleEntry>, AppError> {
        let repo = ScheduleRepository::new(self.db);

        let Some(model) = repo.find_model(params.schedule_id).await? else {
            return Ok(None);
        };

        let merged = CreateScheduleParams {
            teaching_assignment_id: params
                .teaching_assignment_id
                .unwrap_or(model.teaching_assignment_id),
            date: params.date.unwrap_or(model.date),
            lesson_number: params.lesson_number.unwrap_or(model.lesson_number),
        };

        let assignment = self.validate(merged, Some(params.schedule_id)).await?;

        if merged.teaching_assignment_id != model.teaching_assignment_id {
            let current_group = TeachingAssignmentRepository::new(self.db)
                .find_model(model.teaching_assignment_id)
                .await?
                .map(|a| a.group_id);

            if current_group != Some(assignment.group_id)
                && AttendanceRepository::new(self.db)
                    .exists_for_schedule(model.schedule_id)
                    .await?
            {
                return Err(AppError::Conflict(
                    "Lesson has attendance records and cannot move to another group".to_string(),
                ));
            }
        }

        let updated = repo.update(model, merged).await?;

        Ok(repo.find_by_id(updated.schedule_id).await?)
    }

    /// Deletes a lesson with its attendance records.
    pub async fn delete(&self, schedule_id: i32) -> Result<bool, AppError> {
        Ok(ScheduleRepository::new(self.db).delete(schedule_id).await?)
    }

    /// Gets a group's timetable, optionally limited to a month (`YYYY-MM`) or a
    /// year (`YYYY`). The month wins when both are given.
    ///
    /// # Returns
    /// - `Ok(Some(GroupSchedule))` - Lessons ordered by date and lesson number
    /// - `Ok(None)` - Group not found
    /// - `Err(AppError::BadRequest)` - Malformed month or year
    pub async fn group_schedule(
        &self,
        group_id: i32,
        month: Option<&str>,
        year: Option<&str>,
    ) -> Result<Option<GroupSchedule>, AppError> {
        let period = match (month, year) {
            (Some(month), _) => Some(parse_month(month)?),
            (None, Some(year)) => Some(parse_year(year)?),
            (None, None) => None,
        };

        let Some(group) = GroupRepository::new(self.db).find_by_id(group_id).await? else {
            return Ok(None);
        };

        let entries = ScheduleRepository::new(self.db)
            .get_by_group(group_id, period)
            .await?;

        Ok(Some(GroupSchedule {
            group_id: group.group_id,
            group_code: group.group_code,
            entries,
        }))
    }

    /// Returns the lesson's teaching assignment once the slot is free.
    async fn validate(
        &self,
        params: CreateScheduleParams,
        exclude_id: Option<i32>,
    ) -> Result<entity::teaching_assignment::Model, AppError> {
        if !LESSON_NUMBERS.contains(&params.lesson_number) {
            return Err(AppError::BadRequest(format!(
                "lessonNumber must be between {} and {}",
                LESSON_NUMBERS.start(),
                LESSON_NUMBERS.end()
            )));
        }

        let assignment = TeachingAssignmentRepository::new(self.db)
            .find_model(params.teaching_assignment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Teaching assignment not found".to_string()))?;

        let conflict = ScheduleRepository::new(self.db)
            .find_slot_conflict(
                assignment.group_id,
                params.date,
                params.lesson_number,
                exclude_id,
            )
            .await?;

        if let Some(conflict) = conflict {
            return Err(AppError::Conflict(format!(
                "Group already has lesson {} on {} (schedule entry {})",
                params.lesson_number, params.date, conflict.schedule_id
            )));
        }

        Ok(assignment)
    }
}

/// Parses `YYYY-MM` into the inclusive range of that month.
fn parse_month(value: &str) -> Result<SchedulePeriod, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid month '{}', expected YYYY-MM", value));

    let (year, month) = value.split_once('-').ok_or_else(invalid)?;
    let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if year.len() != 4 || month.len() != 2 || !digits(year) || !digits(month) {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    let from = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let to = next.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;

    Ok(SchedulePeriod { from, to })
}

/// Parses `YYYY` into the inclusive range of that year.
fn parse_year(value: &str) -> Result<SchedulePeriod, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid year '{}', expected YYYY", value));

    if value.len() != 4 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = value.parse().map_err(|_| invalid())?;
    let from = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
    let to = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;

    Ok(SchedulePeriod { from, to })
}

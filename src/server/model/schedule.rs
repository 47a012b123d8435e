//! Schedule domain models and parameters.

use chrono::{Datelike, NaiveDate};

use crate::{
    model::schedule::{
        CreateScheduleDto, GroupScheduleDto, GroupScheduleEntryDto, ScheduleDto,
        UpdateScheduleDto,
    },
    server::model::teaching_assignment::TeachingAssignment,
};

/// A lesson slot with the teaching assignment it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub schedule_id: i32,
    pub date: NaiveDate,
    pub lesson_number: i32,
    pub assignment: TeachingAssignment,
}

impl ScheduleEntry {
    pub fn from_entity(entity: entity::schedule::Model, assignment: TeachingAssignment) -> Self {
        Self {
            schedule_id: entity.schedule_id,
            date: entity.date,
            lesson_number: entity.lesson_number,
            assignment,
        }
    }

    pub fn into_dto(self) -> ScheduleDto {
        let teacher_name = self.assignment.teacher_full_name();
        ScheduleDto {
            schedule_id: self.schedule_id,
            teaching_assignment_id: self.assignment.teaching_assignment_id,
            teacher_id: self.assignment.teacher.teacher_id,
            teacher_name,
            group_id: self.assignment.group_id,
            group_code: self.assignment.group_code,
            subject_id: self.assignment.subject_id,
            subject_name: self.assignment.subject_name,
            date: self.date,
            lesson_number: self.lesson_number,
        }
    }

    pub fn into_group_entry_dto(self) -> GroupScheduleEntryDto {
        let teacher_name = self.assignment.teacher_full_name();
        GroupScheduleEntryDto {
            id: self.schedule_id,
            date: self.date,
            day_of_week: weekday_name(self.date),
            lesson_number: self.lesson_number,
            subject_name: self.assignment.subject_name,
            teacher_name,
            teaching_assignment_id: self.assignment.teaching_assignment_id,
        }
    }
}

fn weekday_name(date: NaiveDate) -> String {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
    .to_string()
}

#[derive(Debug, Clone, Copy)]
pub struct CreateScheduleParams {
    pub teaching_assignment_id: i32,
    pub date: NaiveDate,
    pub lesson_number: i32,
}

impl CreateScheduleParams {
    pub fn from_dto(dto: CreateScheduleDto) -> Self {
        Self {
            teaching_assignment_id: dto.teaching_assignment_id,
            date: dto.date,
            lesson_number: dto.lesson_number,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UpdateScheduleParams {
    pub schedule_id: i32,
    pub teaching_assignment_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub lesson_number: Option<i32>,
}

impl UpdateScheduleParams {
    pub fn from_dto(schedule_id: i32, dto: UpdateScheduleDto) -> Self {
        Self {
            schedule_id,
            teaching_assignment_id: dto.teaching_assignment_id,
            date: dto.date,
            lesson_number: dto.lesson_number,
        }
    }
}

/// Inclusive date range a group schedule is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulePeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// A group's lessons, ordered by date and lesson number.
#[derive(Debug, Clone)]
pub struct GroupSchedule {
    pub group_id: i32,
    pub group_code: String,
    pub entries: Vec<ScheduleEntry>,
}

impl GroupSchedule {
    pub fn into_dto(self) -> GroupScheduleDto {
        GroupScheduleDto {
            group_id: self.group_id,
            group_code: self.group_code,
            schedule: self
                .entries
                .into_iter()
                .map(ScheduleEntry::into_group_entry_dto)
                .collect(),
        }
    }
}

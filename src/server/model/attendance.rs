//! Attendance records and aggregated journals.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use entity::attendance::AttendanceStatus;

use crate::model::{
    attendance::{
        AttendanceRecordDto, AttendanceStatusDto, CreateAttendanceDto, JournalDto,
        StudentAttendanceDto, UpdateAttendanceDto,
    },
    group::GroupStudentAttendanceDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub attendance_id: i32,
    pub schedule_id: i32,
    pub student_id: i32,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn from_entity(entity: entity::attendance::Model) -> Self {
        Self {
            attendance_id: entity.attendance_id,
            schedule_id: entity.schedule_id,
            student_id: entity.student_id,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> AttendanceRecordDto {
        AttendanceRecordDto {
            attendance_id: self.attendance_id,
            schedule_id: self.schedule_id,
            student_id: self.student_id,
            status: status_to_dto(self.status),
        }
    }
}

pub fn status_to_dto(status: AttendanceStatus) -> AttendanceStatusDto {
    match status {
        AttendanceStatus::Present => AttendanceStatusDto::Present,
        AttendanceStatus::Absent => AttendanceStatusDto::Absent,
        AttendanceStatus::Late => AttendanceStatusDto::Late,
    }
}

pub fn status_from_dto(status: AttendanceStatusDto) -> AttendanceStatus {
    match status {
        AttendanceStatusDto::Present => AttendanceStatus::Present,
        AttendanceStatusDto::Absent => AttendanceStatus::Absent,
        AttendanceStatusDto::Late => AttendanceStatus::Late,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentStatus {
    pub student_id: i32,
    pub status: AttendanceStatus,
}

/// Statuses to record for the students of one lesson.
#[derive(Debug, Clone)]
pub struct MarkAttendanceParams {
    pub schedule_id: i32,
    pub students: Vec<StudentStatus>,
}

impl MarkAttendanceParams {
    pub fn from_create_dto(dto: CreateAttendanceDto) -> Self {
        Self {
            schedule_id: dto.schedule_id,
            students: dto
                .students
                .into_iter()
                .map(|s| StudentStatus {
                    student_id: s.student_id,
                    status: status_from_dto(s.status),
                })
                .collect(),
        }
    }

    pub fn from_update_dto(schedule_id: i32, dto: UpdateAttendanceDto) -> Self {
        Self::from_create_dto(CreateAttendanceDto {
            schedule_id,
            students: dto.students,
        })
    }
}

/// Filters for listing journals; `None` matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct JournalFilter {
    pub group_id: Option<i32>,
    pub teaching_assignment_id: Option<i32>,
}

/// One attendance record joined with its lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceEntry {
    pub attendance_id: i32,
    pub schedule_id: i32,
    pub teaching_assignment_id: i32,
    pub date: NaiveDate,
    pub lesson_number: i32,
    pub student_id: i32,
    pub status: AttendanceStatus,
}

impl AttendanceEntry {
    pub fn from_entity(
        attendance: entity::attendance::Model,
        schedule: &entity::schedule::Model,
    ) -> Self {
        Self {
            attendance_id: attendance.attendance_id,
            schedule_id: schedule.schedule_id,
            teaching_assignment_id: schedule.teaching_assignment_id,
            date: schedule.date,
            lesson_number: schedule.lesson_number,
            student_id: attendance.student_id,
            status: attendance.status,
        }
    }
}

/// A student's statuses by lesson date, with their attendance percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAttendance {
    pub student_id: i32,
    pub full_name: String,
    pub attendance: BTreeMap<NaiveDate, AttendanceStatus>,
    pub percentage: i32,
}

impl StudentAttendance {
    pub fn into_dto(self) -> StudentAttendanceDto {
        StudentAttendanceDto {
            student_id: self.student_id,
            full_name: self.full_name,
            attendance: self
                .attendance
                .into_iter()
                .map(|(date, status)| (date.format("%Y-%m-%d").to_string(), status_to_dto(status)))
                .collect(),
            percentage: self.percentage,
        }
    }

    pub fn into_percentage_dto(self) -> GroupStudentAttendanceDto {
        GroupStudentAttendanceDto {
            student_id: self.student_id,
            full_name: self.full_name,
            attendance_percentage: self.percentage,
        }
    }
}

/// Aggregated attendance of one teaching assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Journal {
    pub teaching_assignment_id: i32,
    /// Date and lesson number of the most recent recorded lesson.
    pub last_lesson: Option<(NaiveDate, i32)>,
    pub subject_name: String,
    pub teacher_full_name: String,
    pub group_code: String,
    pub students: Vec<StudentAttendance>,
}

impl Journal {
    pub fn into_dto(self) -> JournalDto {
        JournalDto {
            teaching_assignment_id: self.teaching_assignment_id,
            date_of_the_last_lesson: self
                .last_lesson
                .map(|(date, _)| date.format("%Y-%m-%d").to_string()),
            lesson_number: self.last_lesson.map(|(_, lesson)| lesson),
            subject_name: self.subject_name,
            teacher_full_name: self.teacher_full_name,
            group_code: self.group_code,
            total_students: self.students.len() as i32,
            students: self
                .students
                .into_iter()
                .map(StudentAttendance::into_dto)
                .collect(),
        }
    }
}

//! Group domain models and parameters.

use std::collections::BTreeMap;

use crate::{
    model::group::{
        AttendanceStatsDto, CreateGroupDto, GroupAttendanceSummaryDto, GroupDetailsDto, GroupDto,
        GroupStudentDto, GroupTeacherDto, UpdateGroupDto,
    },
    server::model::{
        attendance::StudentAttendance, subject::Subject, teaching_assignment::TeachingAssignment,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupStudent {
    pub student_id: i32,
    pub full_name: String,
}

impl GroupStudent {
    pub fn into_dto(self) -> GroupStudentDto {
        GroupStudentDto {
            id: self.student_id,
            full_name: self.full_name,
        }
    }
}

/// A group with its students ordered by full name.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub group_id: i32,
    pub group_code: String,
    pub name: String,
    pub specialty: String,
    pub course: i32,
    pub year_of_entry: i32,
    pub students: Vec<GroupStudent>,
}

impl Group {
    pub fn from_entity(entity: entity::group::Model, students: Vec<GroupStudent>) -> Self {
        Self {
            group_id: entity.group_id,
            group_code: entity.group_code,
            name: entity.name,
            specialty: entity.specialty,
            course: entity.course,
            year_of_entry: entity.year_of_entry,
            students,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            group_id: self.group_id,
            group_code: self.group_code,
            name: self.name,
            specialty: self.specialty,
            course: self.course,
            year_of_entry: self.year_of_entry,
            students: self.students.into_iter().map(GroupStudent::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub group_code: String,
    pub name: String,
    pub specialty: String,
    pub course: i32,
    pub year_of_entry: i32,
}

impl CreateGroupParams {
    /// Applies defaults: empty name and specialty, first course.
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self {
            group_code: dto.group_code.trim().to_string(),
            name: dto.name.unwrap_or_default(),
            specialty: dto.specialty.unwrap_or_default(),
            course: dto.course.unwrap_or(1),
            year_of_entry: dto.year_of_entry,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGroupParams {
    pub group_id: i32,
    pub group_code: Option<String>,
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub course: Option<i32>,
    pub year_of_entry: Option<i32>,
}

impl UpdateGroupParams {
    pub fn from_dto(group_id: i32, dto: UpdateGroupDto) -> Self {
        Self {
            group_id,
            group_code: dto.group_code.map(|code| code.trim().to_string()),
            name: dto.name,
            specialty: dto.specialty,
            course: dto.course,
            year_of_entry: dto.year_of_entry,
        }
    }
}

/// A teacher of a group with the subjects they teach there.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTeacher {
    pub teacher_id: i32,
    pub full_name: String,
    pub subjects: Vec<String>,
}

impl GroupTeacher {
    pub fn into_dto(self) -> GroupTeacherDto {
        GroupTeacherDto {
            teacher_id: self.teacher_id,
            full_name: self.full_name,
            subjects: self.subjects,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceStats {
    pub average: i32,
    /// Percentage per `YYYY-MM`.
    pub by_month: BTreeMap<String, i32>,
}

impl AttendanceStats {
    pub fn into_dto(self) -> AttendanceStatsDto {
        AttendanceStatsDto {
            average: self.average,
            by_month: self.by_month,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupDetails {
    pub group: Group,
    pub teachers: Vec<GroupTeacher>,
    pub subjects: Vec<Subject>,
    pub teaching_assignments: Vec<TeachingAssignment>,
    pub attendance_stats: AttendanceStats,
}

impl GroupDetails {
    pub fn into_dto(self) -> GroupDetailsDto {
        GroupDetailsDto {
            group_id: self.group.group_id,
            group_code: self.group.group_code,
            name: self.group.name,
            specialty: self.group.specialty,
            course: self.group.course,
            year_of_entry: self.group.year_of_entry,
            students: self
                .group
                .students
                .into_iter()
                .map(GroupStudent::into_dto)
                .collect(),
            teachers: self.teachers.into_iter().map(GroupTeacher::into_dto).collect(),
            subjects: self.subjects.into_iter().map(Subject::into_dto).collect(),
            teaching_assignments: self
                .teaching_assignments
                .into_iter()
                .map(TeachingAssignment::into_dto)
                .collect(),
            attendance_stats: self.attendance_stats.into_dto(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceTotals {
    pub lessons: i32,
    pub present: i32,
    pub absent: i32,
    pub late: i32,
}

#[derive(Debug, Clone)]
pub struct GroupAttendanceSummary {
    pub group_id: i32,
    pub group_code: String,
    pub students: Vec<StudentAttendance>,
    pub average_attendance: i32,
    pub totals: AttendanceTotals,
}

impl GroupAttendanceSummary {
    pub fn into_dto(self) -> GroupAttendanceSummaryDto {
        GroupAttendanceSummaryDto {
            group_id: self.group_id,
            group_code: self.group_code,
            total_students: self.students.len() as i32,
            students: self
                .students
                .into_iter()
                .map(StudentAttendance::into_dto)
                .collect(),
            average_attendance: self.average_attendance,
            total_lessons: self.totals.lessons,
            total_present: self.totals.present,
            total_absent: self.totals.absent,
            total_late: self.totals.late,
        }
    }
}

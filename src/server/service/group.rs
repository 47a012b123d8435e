//! Groups with their rosters, teachers and attendance statistics.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attendance::AttendanceRepository, group::GroupRepository, student::StudentRepository,
        teaching_assignment::TeachingAssignmentRepository,
    },
    error::AppError,
    model::{
        attendance::{AttendanceEntry, JournalFilter, StudentAttendance},
        group::{
            AttendanceStats, CreateGroupParams, Group, GroupAttendanceSummary, GroupDetails,
            GroupStudent, GroupTeacher, UpdateGroupParams,
        },
        student::Student,
        subject::Subject,
        teaching_assignment::{TeachingAssignment, TeachingAssignmentFilter},
    },
    service::attendance::journal,
};

const MAX_GROUP_CODE_LEN: usize = 15;
const COURSES: std::ops::RangeInclusive<i32> = 1..=6;
const ENTRY_YEARS: std::ops::RangeInclusive<i32> = 2000..=2100;

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - Created group, without students
    /// - `Err(AppError::BadRequest)` - Invalid code, course or year of entry
    /// - `Err(AppError::Conflict)` - Code already used by another group
    pub async fn create(&self, params: CreateGroupParams) -> Result<Group, AppError> {
        validate_code(&params.group_code)?;
        validate_course(params.course)?;
        validate_year(params.year_of_entry)?;

        let repo = GroupRepository::new(self.db);
        if repo.code_exists(&params.group_code, None).await? {
            return Err(duplicate_code(&params.group_code));
        }

        let group = repo.create(params).await?;

        Ok(Group::from_entity(group, Vec::new()))
    }

    /// Gets all groups ordered by code, each with its students.
    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        let groups = GroupRepository::new(self.db).get_all().await?;

        let mut rosters: HashMap<i32, Vec<GroupStudent>> = HashMap::new();
        for student in StudentRepository::new(self.db).get_all(None).await? {
            rosters
                .entry(student.group_id)
                .or_default()
                .push(group_student(student));
        }

        Ok(groups
            .into_iter()
            .map(|group| {
                let students = rosters.remove(&group.group_id).unwrap_or_default();
                Group::from_entity(group, students)
            })
            .collect())
    }

    pub async fn get_by_id(&self, group_id: i32) -> Result<Option<Group>, AppError> {
        let Some(group) = GroupRepository::new(self.db).find_by_id(group_id).await? else {
            return Ok(None);
        };

        let students = self.roster(group_id).await?;

        Ok(Some(Group::from_entity(group, students)))
    }

    /// Updates the provided fields of a group, validating them as on create.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Updated group with its students
    /// - `Ok(None)` - Group not found
    /// - `Err(AppError::BadRequest)` - Invalid code, course or year of entry
    /// - `Err(AppError::Conflict)` - Code already used by another group
    pub async fn update(&self, params: UpdateGroupParams) -> Result<Option<Group>, AppError> {
        if let Some(code) = &params.group_code {
            validate_code(code)?;
        }
        if let Some(course) = params.course {
            validate_course(course)?;
        }
        if let Some(year) = params.year_of_entry {
            validate_year(year)?;
        }

        let repo = GroupRepository::new(self.db);
        if !repo.exists(params.group_id).await? {
            return Ok(None);
        }

        if let Some(code) = &params.group_code {
            if repo.code_exists(code, Some(params.group_id)).await? {
                return Err(duplicate_code(code));
            }
        }

        let group_id = params.group_id;
        let Some(group) = repo.update(params).await? else {
            return Ok(None);
        };

        let students = self.roster(group_id).await?;

        Ok(Some(Group::from_entity(group, students)))
    }

    /// Deletes a group with its students, assignments and lessons.
    pub async fn delete(&self, group_id: i32) -> Result<bool, AppError> {
        Ok(GroupRepository::new(self.db).delete(group_id).await?)
    }

    /// Gets a group with its teachers, subjects, assignments and attendance statistics.
    pub async fn details(&self, group_id: i32) -> Result<Option<GroupDetails>, AppError> {
        let Some(group) = self.get_by_id(group_id).await? else {
            return Ok(None);
        };

        let assignments = self.assignments(group_id).await?;
        let entries = self.group_entries(&group).await?;
        let students = journal::summarize_students(&roster_names(&group), &entries);

        let attendance_stats = AttendanceStats {
            average: journal::average_percentage(&students),
            by_month: journal::monthly_percentages(&entries),
        };

        Ok(Some(GroupDetails {
            teachers: group_teachers(&assignments),
            subjects: group_subjects(&assignments),
            teaching_assignments: assignments,
            attendance_stats,
            group,
        }))
    }

    /// Gets the distinct teachers of a group with the subjects they teach there.
    pub async fn teachers(&self, group_id: i32) -> Result<Option<Vec<GroupTeacher>>, AppError> {
        if !GroupRepository::new(self.db).exists(group_id).await? {
            return Ok(None);
        }

        let assignments = self.assignments(group_id).await?;

        Ok(Some(group_teachers(&assignments)))
    }

    /// Gets the roster of a group with each student's attendance percentage.
    pub async fn students_with_attendance(
        &self,
        group_id: i32,
    ) -> Result<Option<Vec<StudentAttendance>>, AppError> {
        let Some(summary) = self.attendance_summary(group_id).await? else {
            return Ok(None);
        };

        Ok(Some(summary.students))
    }

    /// Summarizes attendance of every student of a group over the group's lessons.
    ///
    /// # Returns
    /// - `Ok(Some(GroupAttendanceSummary))` - Per-student rows in roster order plus totals
    /// - `Ok(None)` - Group not found
    pub async fn attendance_summary(
        &self,
        group_id: i32,
    ) -> Result<Option<GroupAttendanceSummary>, AppError> {
        let Some(group) = self.get_by_id(group_id).await? else {
            return Ok(None);
        };

        let entries = self.group_entries(&group).await?;
        let students = journal::summarize_students(&roster_names(&group), &entries);

        Ok(Some(GroupAttendanceSummary {
            group_id: group.group_id,
            group_code: group.group_code,
            average_attendance: journal::average_percentage(&students),
            totals: journal::totals(&entries),
            students,
        }))
    }

    async fn roster(&self, group_id: i32) -> Result<Vec<GroupStudent>, AppError> {
        let students = StudentRepository::new(self.db)
            .get_all(Some(group_id))
            .await?;

        Ok(students.into_iter().map(group_student).collect())
    }

    async fn assignments(&self, group_id: i32) -> Result<Vec<TeachingAssignment>, AppError> {
        Ok(TeachingAssignmentRepository::new(self.db)
            .get_all(TeachingAssignmentFilter {
                teacher_id: None,
                group_id: Some(group_id),
            })
            .await?)
    }

    /// Records of the group's lessons belonging to its current students.
    async fn group_entries(&self, group: &Group) -> Result<Vec<AttendanceEntry>, AppError> {
        let roster: HashSet<i32> = group.students.iter().map(|s| s.student_id).collect();

        let mut entries = AttendanceRepository::new(self.db)
            .get_entries(JournalFilter {
                group_id: Some(group.group_id),
                teaching_assignment_id: None,
            })
            .await?;
        entries.retain(|e| roster.contains(&e.student_id));

        Ok(entries)
    }
}

fn group_student(student: Student) -> GroupStudent {
    GroupStudent {
        full_name: student.full_name(),
        student_id: student.student_id,
    }
}

fn roster_names(group: &Group) -> Vec<(i32, String)> {
    group
        .students
        .iter()
        .map(|s| (s.student_id, s.full_name.clone()))
        .collect()
}

/// Teachers in order of first assignment, each subject listed once.
fn group_teachers(assignments: &[TeachingAssignment]) -> Vec<GroupTeacher> {
    let mut teachers: Vec<GroupTeacher> = Vec::new();

    for assignment in assignments {
        let teacher_id = assignment.teacher.teacher_id;
        let index = match teachers.iter().position(|t| t.teacher_id == teacher_id) {
            Some(index) => index,
            None => {
                teachers.push(GroupTeacher {
                    teacher_id,
                    full_name: assignment.teacher_full_name(),
                    subjects: Vec::new(),
                });
                teachers.len() - 1
            }
        };

        let subjects = &mut teachers[index].subjects;
        if !subjects.contains(&assignment.subject_name) {
            subjects.push(assignment.subject_name.clone());
        }
    }

    teachers
}

fn group_subjects(assignments: &[TeachingAssignment]) -> Vec<Subject> {
    let mut seen = HashSet::new();

    assignments
        .iter()
        .filter(|a| seen.insert(a.subject_id))
        .map(|a| Subject {
            subject_id: a.subject_id,
            name: a.subject_name.clone(),
        })
        .collect()
}

fn validate_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::BadRequest(
            "groupCode must not be empty".to_string(),
        ));
    }
    if code.chars().count() > MAX_GROUP_CODE_LEN {
        return Err(AppError::BadRequest(format!(
            "groupCode must be at most {} characters",
            MAX_GROUP_CODE_LEN
        )));
    }

    Ok(())
}

fn validate_course(course: i32) -> Result<(), AppError> {
    if !COURSES.contains(&course) {
        return Err(AppError::BadRequest(format!(
            "course must be between {} and {}",
            COURSES.start(),
            COURSES.end()
        )));
    }

    Ok(())
}

fn validate_year(year: i32) -> Result<(), AppError> {
    if !ENTRY_YEARS.contains(&year) {
        return Err(AppError::BadRequest(format!(
            "yearOfEntry must be between {} and {}",
            ENTRY_YEARS.start(),
            ENTRY_YEARS.end()
        )));
    }

    Ok(())
}

fn duplicate_code(code: &str) -> AppError {
    AppError::Conflict(format!("Group with code '{}' already exists", code))
}

//! Attendance marking and journal queries.

pub mod journal;

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attendance::AttendanceRepository, schedule::ScheduleRepository,
        student::StudentRepository, teaching_assignment::TeachingAssignmentRepository,
        user::UserRepository,
    },
    error::AppError,
    model::attendance::{
        AttendanceEntry, AttendanceRecord, Journal, JournalFilter, MarkAttendanceParams,
    },
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records statuses for a lesson's students.
    ///
    /// # Returns
    /// - `Ok(Vec<AttendanceRecord>)` - Created records in request order
    /// - `Err(AppError::BadRequest)` - Empty or duplicate student list, or student outside the lesson's group
    /// - `Err(AppError::NotFound)` - Lesson or student not found
    /// - `Err(AppError::Conflict)` - A student already has a record for this lesson
    pub async fn create(
        &self,
        params: MarkAttendanceParams,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        self.validate(&params).await?;

        let repo = AttendanceRepository::new(self.db);

        let student_ids = params.students.iter().map(|s| s.student_id).collect();
        let existing = repo
            .find_for_students(params.schedule_id, student_ids)
            .await?;
        if let Some(record) = existing.first() {
            return Err(AppError::Conflict(format!(
                "Attendance for student {} in schedule entry {} already exists",
                record.student_id, params.schedule_id
            )));
        }

        let schedule_id = params.schedule_id;
        let created = repo
            .create_many(schedule_id, params.students)
            .await
            .map_err(|err| {
                AppError::conflict_on_unique(err, || {
                    format!("Attendance for schedule entry {} already exists", schedule_id)
                })
            })?;

        Ok(created.into_iter().map(AttendanceRecord::from_entity).collect())
    }

    /// Sets statuses for a lesson's students, creating missing records.
    ///
    /// Same validation as `create`, without the existing-record conflict.
    pub async fn update(
        &self,
        params: MarkAttendanceParams,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        self.validate(&params).await?;

        let saved = AttendanceRepository::new(self.db)
            .upsert_many(params.schedule_id, params.students)
            .await?;

        Ok(saved.into_iter().map(AttendanceRecord::from_entity).collect())
    }

    /// Gets journals of all assignments matching the filter, ordered by assignment id.
    pub async fn get_journals(&self, filter: JournalFilter) -> Result<Vec<Journal>, AppError> {
        let entries = AttendanceRepository::new(self.db)
            .get_entries(filter)
            .await?;

        self.aggregate(entries).await
    }

    /// Gets the journal of the assignment an attendance record belongs to.
    ///
    /// # Returns
    /// - `Ok(Some(Journal))` - Journal of the record's assignment
    /// - `Ok(None)` - Record not found
    pub async fn get_journal_by_attendance_id(
        &self,
        attendance_id: i32,
    ) -> Result<Option<Journal>, AppError> {
        let Some(record) = AttendanceRepository::new(self.db)
            .find_by_id(attendance_id)
            .await?
        else {
            return Ok(None);
        };

        let lesson = ScheduleRepository::new(self.db)
            .find_model(record.schedule_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Schedule entry {} of attendance {} not found",
                    record.schedule_id, attendance_id
                ))
            })?;

        let journals = self
            .get_journals(JournalFilter {
                group_id: None,
                teaching_assignment_id: Some(lesson.teaching_assignment_id),
            })
            .await?;

        Ok(journals.into_iter().next())
    }

    /// Deletes a single attendance record.
    pub async fn delete(&self, attendance_id: i32) -> Result<bool, AppError> {
        Ok(AttendanceRepository::new(self.db)
            .delete(attendance_id)
            .await?)
    }

    async fn aggregate(&self, entries: Vec<AttendanceEntry>) -> Result<Vec<Journal>, AppError> {
        let assignment_ids: Vec<i32> = entries
            .iter()
            .map(|e| e.teaching_assignment_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let student_ids: Vec<i32> = entries
            .iter()
            .map(|e| e.student_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let assignments = TeachingAssignmentRepository::new(self.db)
            .get_by_ids(assignment_ids)
            .await?;
        let names = UserRepository::new(self.db).full_names(student_ids).await?;

        Ok(journal::build_journals(&entries, &assignments, &names))
    }

    /// Checks the student list, the lesson and each student's group membership.
    async fn validate(&self, params: &MarkAttendanceParams) -> Result<(), AppError> {
        if params.students.is_empty() {
            return Err(AppError::BadRequest(
                "At least one student is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for student in &params.students {
            if !seen.insert(student.student_id) {
                return Err(AppError::BadRequest(format!(
                    "Student {} is listed more than once",
                    student.student_id
                )));
            }
        }

        let lesson = ScheduleRepository::new(self.db)
            .find_model(params.schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule entry not found".to_string()))?;

        let assignment = TeachingAssignmentRepository::new(self.db)
            .find_model(lesson.teaching_assignment_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Teaching assignment {} of schedule entry {} not found",
                    lesson.teaching_assignment_id, lesson.schedule_id
                ))
            })?;

        let student_repo = StudentRepository::new(self.db);
        for student in &params.students {
            let Some(model) = student_repo.find_model(student.student_id).await? else {
                return Err(AppError::NotFound(format!(
                    "Student {} not found",
                    student.student_id
                )));
            };

            if model.group_id != assignment.group_id {
                return Err(AppError::BadRequest(format!(
                    "Student {} does not belong to the group of this lesson",
                    student.student_id
                )));
            }
        }

        Ok(())
    }
}

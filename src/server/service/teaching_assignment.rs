use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attendance::AttendanceRepository, group::GroupRepository, schedule::ScheduleRepository,
        subject::SubjectRepository, teacher::TeacherRepository,
        teaching_assignment::TeachingAssignmentRepository,
    },
    error::AppError,
    model::teaching_assignment::{
        CreateTeachingAssignmentParams, TeachingAssignment, TeachingAssignmentFilter,
        UpdateTeachingAssignmentParams,
    },
};

const SEMESTERS: std::ops::RangeInclusive<i32> = 1..=12;

pub struct TeachingAssignmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeachingAssignmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a teacher to teach a subject to a group in a semester.
    ///
    /// # Returns
    /// - `Ok(TeachingAssignment)` - Created assignment
    /// - `Err(AppError::BadRequest)` - Non-positive id or semester out of range
    /// - `Err(AppError::NotFound)` - Teacher, group or subject not found
    /// - `Err(AppError::Conflict)` - The same assignment already exists
    pub async fn create(
        &self,
        params: CreateTeachingAssignmentParams,
    ) -> Result<TeachingAssignment, AppError> {
        self.validate(params, None).await?;

        let repo = TeachingAssignmentRepository::new(self.db);
        let created = repo.create(params).await?;

        repo.find_by_id(created.teaching_assignment_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Teaching assignment not found after creation".to_string())
            })
    }

    pub async fn get_all(
        &self,
        filter: TeachingAssignmentFilter,
    ) -> Result<Vec<TeachingAssignment>, AppError> {
        Ok(TeachingAssignmentRepository::new(self.db)
            .get_all(filter)
            .await?)
    }

    pub async fn get_by_id(
        &self,
        teaching_assignment_id: i32,
    ) -> Result<Option<TeachingAssignment>, AppError> {
        Ok(TeachingAssignmentRepository::new(self.db)
            .find_by_id(teaching_assignment_id)
            .await?)
    }

    /// Merges the provided fields into an assignment and re-validates the result.
    ///
    /// Changing the group moves every lesson of the assignment with it, so each
    /// lesson must fit the new group's timetable and none may have attendance.
    ///
    /// # Returns
    /// - `Ok(Some(TeachingAssignment))` - Updated assignment
    /// - `Ok(None)` - Assignment not found
    /// - `Err(AppError::Conflict)` - A lesson clashes in the new group or has attendance
    /// - `Err(AppError)` - Same errors as `create`
    pub async fn update(
        &self,
        params: UpdateTeachingAssignmentParams,
    ) -> Result<Option<TeachingAssignment>, AppError> {
        let repo = TeachingAssignmentRepository::new(self.db);

        let Some(model) = repo.find_model(params.teaching_assignment_id).await? else {
            return Ok(None);
        };

        let merged = CreateTeachingAssignmentParams {
            teacher_id: params.teacher_id.unwrap_or(model.teacher_id),
            group_id: params.group_id.unwrap_or(model.group_id),
            subject_id: params.subject_id.unwrap_or(model.subject_id),
            semester: params.semester.unwrap_or(model.semester),
        };

        self.validate(merged, Some(params.teaching_assignment_id))
            .await?;

        if merged.group_id != model.group_id {
            self.ensure_lessons_fit_group(model.teaching_assignment_id, merged.group_id)
                .await?;
        }

        let updated = repo.update(model, merged).await?;

        Ok(repo.find_by_id(updated.teaching_assignment_id).await?)
    }

    /// Deletes an assignment with its lessons and their attendance.
    pub async fn delete(&self, teaching_assignment_id: i32) -> Result<bool, AppError> {
        Ok(TeachingAssignmentRepository::new(self.db)
            .delete(teaching_assignment_id)
            .await?)
    }

    async fn ensure_lessons_fit_group(
        &self,
        teaching_assignment_id: i32,
        group_id: i32,
    ) -> Result<(), AppError> {
        if AttendanceRepository::new(self.db)
            .exists_for_assignment(teaching_assignment_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Lessons of this assignment have attendance records; the group cannot change"
                    .to_string(),
            ));
        }

        let schedule_repo = ScheduleRepository::new(self.db);
        for lesson in schedule_repo.get_all(Some(teaching_assignment_id)).await? {
            let conflict = schedule_repo
                .find_slot_conflict(
                    group_id,
                    lesson.date,
                    lesson.lesson_number,
                    Some(lesson.schedule_id),
                )
                .await?;

            if let Some(conflict) = conflict {
                return Err(AppError::Conflict(format!(
                    "Group already has lesson {} on {} (schedule entry {})",
                    lesson.lesson_number, lesson.date, conflict.schedule_id
                )));
            }
        }

        Ok(())
    }

    async fn validate(
        &self,
        params: CreateTeachingAssignmentParams,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        for (field, id) in [
            ("teacherId", params.teacher_id),
            ("groupId", params.group_id),
            ("subjectId", params.subject_id),
        ] {
            if id <= 0 {
                return Err(AppError::BadRequest(format!("{} must be positive", field)));
            }
        }

        if !SEMESTERS.contains(&params.semester) {
            return Err(AppError::BadRequest(format!(
                "semester must be between {} and {}",
                SEMESTERS.start(),
                SEMESTERS.end()
            )));
        }

        if !TeacherRepository::new(self.db)
            .exists(params.teacher_id)
            .await?
        {
            return Err(AppError::NotFound("Teacher not found".to_string()));
        }
        if !GroupRepository::new(self.db).exists(params.group_id).await? {
            return Err(AppError::NotFound("Group not found".to_string()));
        }
        if !SubjectRepository::new(self.db)
            .exists(params.subject_id)
            .await?
        {
            return Err(AppError::NotFound("Subject not found".to_string()));
        }

        if TeachingAssignmentRepository::new(self.db)
            .find_duplicate(params, exclude_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "This teacher already teaches this subject to this group in this semester"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

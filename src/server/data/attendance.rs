//! Attendance record repository.
//!
//! Reads return `AttendanceEntry` values, records joined with their lesson, which
//! is the input of journal aggregation.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};

use crate::server::model::attendance::{AttendanceEntry, JournalFilter, StudentStatus};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        attendance_id: i32,
    ) -> Result<Option<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find_by_id(attendance_id)
            .one(self.db)
            .await
    }

    /// Gets the existing records of a lesson for the given students.
    pub async fn find_for_students(
        &self,
        schedule_id: i32,
        student_ids: Vec<i32>,
    ) -> Result<Vec<entity::attendance::Model>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ScheduleId.eq(schedule_id))
            .filter(entity::attendance::Column::StudentId.is_in(student_ids))
            .all(self.db)
            .await
    }

    /// Inserts one record per student for a lesson in a single transaction.
    pub async fn create_many(
        &self,
        schedule_id: i32,
        students: Vec<StudentStatus>,
    ) -> Result<Vec<entity::attendance::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let mut created = Vec::with_capacity(students.len());
        for student in students {
            let record = entity::attendance::ActiveModel {
                schedule_id: ActiveValue::Set(schedule_id),
                student_id: ActiveValue::Set(student.student_id),
                status: ActiveValue::Set(student.status),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            created.push(record);
        }

        txn.commit().await?;

        Ok(created)
    }

    /// Sets the status of each student for a lesson, inserting missing records.
    pub async fn upsert_many(
        &self,
        schedule_id: i32,
        students: Vec<StudentStatus>,
    ) -> Result<Vec<entity::attendance::Model>, DbErr> {
        let student_ids: Vec<i32> = students.iter().map(|s| s.student_id).collect();
        let mut existing: HashMap<i32, entity::attendance::Model> = self
            .find_for_students(schedule_id, student_ids)
            .await?
            .into_iter()
            .map(|a| (a.student_id, a))
            .collect();

        let txn = self.db.begin().await?;

        let mut saved = Vec::with_capacity(students.len());
        for student in students {
            let record = match existing.remove(&student.student_id) {
                Some(record) => {
                    let mut active: entity::attendance::ActiveModel = record.into();
                    active.status = ActiveValue::Set(student.status);
                    active.update(&txn).await?
                }
                None => {
                    entity::attendance::ActiveModel {
                        schedule_id: ActiveValue::Set(schedule_id),
                        student_id: ActiveValue::Set(student.student_id),
                        status: ActiveValue::Set(student.status),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await?
                }
            };
            saved.push(record);
        }

        txn.commit().await?;

        Ok(saved)
    }

    pub async fn delete(&self, attendance_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Attendance::delete_by_id(attendance_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets records of lessons whose assignment matches the filter.
    ///
    /// Records are joined with their lesson and its assignment in one query.
    pub async fn get_entries(&self, filter: JournalFilter) -> Result<Vec<AttendanceEntry>, DbErr> {
        let mut query = entity::prelude::Attendance::find()
            .find_also_related(entity::prelude::Schedule)
            .join(
                JoinType::InnerJoin,
                entity::schedule::Relation::TeachingAssignment.def(),
            )
            .order_by_asc(entity::attendance::Column::AttendanceId);

        if let Some(group_id) = filter.group_id {
            query = query.filter(entity::teaching_assignment::Column::GroupId.eq(group_id));
        }
        if let Some(id) = filter.teaching_assignment_id {
            query = query.filter(entity::schedule::Column::TeachingAssignmentId.eq(id));
        }

        let rows = query.all(self.db).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(record, lesson)| {
                Some(AttendanceEntry::from_entity(record, &lesson?))
            })
            .collect())
    }

    /// Whether any record exists for a lesson.
    pub async fn exists_for_schedule(&self, schedule_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ScheduleId.eq(schedule_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether any record exists for a lesson of the assignment.
    pub async fn exists_for_assignment(&self, teaching_assignment_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Attendance::find()
            .inner_join(entity::prelude::Schedule)
            .filter(entity::schedule::Column::TeachingAssignmentId.eq(teaching_assignment_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

//! Teaching assignment repository.
//!
//! Assignments are returned resolved with their teacher's user row, group and
//! subject. Related rows are fetched in one query per table and joined in memory.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::teaching_assignment::{
    CreateTeachingAssignmentParams, TeachingAssignment, TeachingAssignmentFilter,
};

pub struct TeachingAssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeachingAssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateTeachingAssignmentParams,
    ) -> Result<entity::teaching_assignment::Model, DbErr> {
        entity::teaching_assignment::ActiveModel {
            teacher_id: ActiveValue::Set(params.teacher_id),
            group_id: ActiveValue::Set(params.group_id),
            subject_id: ActiveValue::Set(params.subject_id),
            semester: ActiveValue::Set(params.semester),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_model(
        &self,
        teaching_assignment_id: i32,
    ) -> Result<Option<entity::teaching_assignment::Model>, DbErr> {
        entity::prelude::TeachingAssignment::find_by_id(teaching_assignment_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        teaching_assignment_id: i32,
    ) -> Result<Option<TeachingAssignment>, DbErr> {
        let Some(model) = self.find_model(teaching_assignment_id).await? else {
            return Ok(None);
        };

        Ok(self.resolve(vec![model]).await?.pop())
    }

    /// Finds an assignment with exactly this teacher, group, subject and semester.
    ///
    /// # Arguments
    /// - `params` - The tuple to look for
    /// - `exclude_id` - Assignment ignored by the check, used when updating
    pub async fn find_duplicate(
        &self,
        params: CreateTeachingAssignmentParams,
        exclude_id: Option<i32>,
    ) -> Result<Option<entity::teaching_assignment::Model>, DbErr> {
        let mut query = entity::prelude::TeachingAssignment::find()
            .filter(entity::teaching_assignment::Column::TeacherId.eq(params.teacher_id))
            .filter(entity::teaching_assignment::Column::GroupId.eq(params.group_id))
            .filter(entity::teaching_assignment::Column::SubjectId.eq(params.subject_id))
            .filter(entity::teaching_assignment::Column::Semester.eq(params.semester));

        if let Some(id) = exclude_id {
            query = query.filter(entity::teaching_assignment::Column::TeachingAssignmentId.ne(id));
        }

        query.one(self.db).await
    }

    /// Gets assignments matching the filter, ordered by id.
    pub async fn get_all(
        &self,
        filter: TeachingAssignmentFilter,
    ) -> Result<Vec<TeachingAssignment>, DbErr> {
        let mut query = entity::prelude::TeachingAssignment::find()
            .order_by_asc(entity::teaching_assignment::Column::TeachingAssignmentId);

        if let Some(teacher_id) = filter.teacher_id {
            query = query.filter(entity::teaching_assignment::Column::TeacherId.eq(teacher_id));
        }
        if let Some(group_id) = filter.group_id {
            query = query.filter(entity::teaching_assignment::Column::GroupId.eq(group_id));
        }

        let models = query.all(self.db).await?;

        self.resolve(models).await
    }

    /// Gets resolved assignments keyed by id.
    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, TeachingAssignment>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = entity::prelude::TeachingAssignment::find()
            .filter(entity::teaching_assignment::Column::TeachingAssignmentId.is_in(ids))
            .all(self.db)
            .await?;

        Ok(self
            .resolve(models)
            .await?
            .into_iter()
            .map(|a| (a.teaching_assignment_id, a))
            .collect())
    }

    /// Overwrites every column of an assignment with the merged values.
    pub async fn update(
        &self,
        model: entity::teaching_assignment::Model,
        values: CreateTeachingAssignmentParams,
    ) -> Result<entity::teaching_assignment::Model, DbErr> {
        let mut active: entity::teaching_assignment::ActiveModel = model.into();
        active.teacher_id = ActiveValue::Set(values.teacher_id);
        active.group_id = ActiveValue::Set(values.group_id);
        active.subject_id = ActiveValue::Set(values.subject_id);
        active.semester = ActiveValue::Set(values.semester);

        active.update(self.db).await
    }

    /// Deletes an assignment; its lessons and their attendance cascade.
    pub async fn delete(&self, teaching_assignment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TeachingAssignment::delete_by_id(teaching_assignment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Joins assignment rows with their teacher, group and subject, keeping input order.
    async fn resolve(
        &self,
        models: Vec<entity::teaching_assignment::Model>,
    ) -> Result<Vec<TeachingAssignment>, DbErr> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let teacher_ids: Vec<i32> = models.iter().map(|m| m.teacher_id).collect();
        let group_ids: Vec<i32> = models.iter().map(|m| m.group_id).collect();
        let subject_ids: Vec<i32> = models.iter().map(|m| m.subject_id).collect();

        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.is_in(teacher_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.user_id, u))
            .collect();

        let groups: HashMap<i32, entity::group::Model> = entity::prelude::Group::find()
            .filter(entity::group::Column::GroupId.is_in(group_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.group_id, g))
            .collect();

        let subjects: HashMap<i32, entity::subject::Model> = entity::prelude::Subject::find()
            .filter(entity::subject::Column::SubjectId.is_in(subject_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.subject_id, s))
            .collect();

        Ok(models
            .into_iter()
            .filter_map(|model| {
                let user = users.get(&model.teacher_id)?.clone();
                let group = groups.get(&model.group_id)?.clone();
                let subject = subjects.get(&model.subject_id)?.clone();
                Some(TeachingAssignment::from_entity(model, user, group, subject))
            })
            .collect())
    }
}

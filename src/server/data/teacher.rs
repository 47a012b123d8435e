use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::user::insert_user,
    model::{teacher::Teacher, user::CreateUserParams},
};

pub struct TeacherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the user row, its optional credentials and role, and the teacher row
    /// in one transaction.
    pub async fn create(&self, params: CreateUserParams) -> Result<Teacher, DbErr> {
        let txn = self.db.begin().await?;

        let user = insert_user(&txn, params).await?;

        entity::teacher::ActiveModel {
            teacher_id: ActiveValue::Set(user.user_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Teacher::from_entity(user))
    }

    pub async fn find_by_id(&self, teacher_id: i32) -> Result<Option<Teacher>, DbErr> {
        let user = entity::prelude::User::find_by_id(teacher_id)
            .inner_join(entity::prelude::Teacher)
            .one(self.db)
            .await?;

        Ok(user.map(Teacher::from_entity))
    }

    pub async fn exists(&self, teacher_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Teacher::find_by_id(teacher_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets teachers ordered by surname, name and patronymic.
    ///
    /// # Arguments
    /// - `group_id` - When set, only teachers holding an assignment in this group
    pub async fn get_all(&self, group_id: Option<i32>) -> Result<Vec<Teacher>, DbErr> {
        let mut query = entity::prelude::User::find().inner_join(entity::prelude::Teacher);

        if let Some(group_id) = group_id {
            let teacher_ids: Vec<i32> = entity::prelude::TeachingAssignment::find()
                .select_only()
                .column(entity::teaching_assignment::Column::TeacherId)
                .filter(entity::teaching_assignment::Column::GroupId.eq(group_id))
                .distinct()
                .into_tuple()
                .all(self.db)
                .await?;

            if teacher_ids.is_empty() {
                return Ok(Vec::new());
            }

            query = query.filter(entity::teacher::Column::TeacherId.is_in(teacher_ids));
        }

        let users = query
            .order_by_asc(entity::user::Column::Surname)
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Patronymic)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(Teacher::from_entity).collect())
    }
}

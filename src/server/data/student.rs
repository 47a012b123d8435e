use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::{apply_name_change, insert_user},
    model::{
        student::Student,
        user::{CreateUserParams, NameChange},
    },
};

pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the user row and the student row in one transaction.
    ///
    /// # Arguments
    /// - `params` - Name parts of the student
    /// - `group_id` - Group the student belongs to; must exist
    pub async fn create(
        &self,
        params: CreateUserParams,
        group_id: i32,
    ) -> Result<entity::student::Model, DbErr> {
        let txn = self.db.begin().await?;

        let user = insert_user(&txn, params).await?;

        let student = entity::student::ActiveModel {
            student_id: ActiveValue::Set(user.user_id),
            group_id: ActiveValue::Set(group_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(student)
    }

    pub async fn find_model(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await
    }

    /// Gets a student with name and group code.
    pub async fn find_by_id(&self, student_id: i32) -> Result<Option<Student>, DbErr> {
        let Some(student) = self.find_model(student_id).await? else {
            return Ok(None);
        };

        Ok(self.resolve(vec![student]).await?.pop())
    }

    /// Gets students ordered by surname, name and patronymic.
    ///
    /// # Arguments
    /// - `group_id` - When set, only students of this group
    pub async fn get_all(&self, group_id: Option<i32>) -> Result<Vec<Student>, DbErr> {
        let mut query = entity::prelude::Student::find()
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::user::Column::Surname)
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Patronymic);

        if let Some(group_id) = group_id {
            query = query.filter(entity::student::Column::GroupId.eq(group_id));
        }

        let rows = query.all(self.db).await?;

        let group_ids: Vec<i32> = rows.iter().map(|(s, _)| s.group_id).collect();
        let groups = self.groups_by_id(group_ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(student, user)| {
                let user = user?;
                let group = groups.get(&student.group_id)?.clone();
                Some(Student::from_entity(student, user, group))
            })
            .collect())
    }

    /// Renames a student and optionally moves them to another group in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated student row
    /// - `Ok(None)` - Student not found, nothing is written
    /// - `Err(DbErr)` - Database error, nothing is written
    pub async fn update(
        &self,
        student_id: i32,
        change: NameChange,
        group_id: Option<i32>,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(student) = entity::prelude::Student::find_by_id(student_id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        apply_name_change(&txn, student_id, change).await?;

        let student = match group_id.filter(|g| *g != student.group_id) {
            Some(group_id) => {
                let mut active: entity::student::ActiveModel = student.into();
                active.group_id = ActiveValue::Set(group_id);
                active.update(&txn).await?
            }
            None => student,
        };

        txn.commit().await?;

        Ok(Some(student))
    }

    /// Resolves student rows with their user and group, keeping input order.
    async fn resolve(&self, students: Vec<entity::student::Model>) -> Result<Vec<Student>, DbErr> {
        let user_ids: Vec<i32> = students.iter().map(|s| s.student_id).collect();
        let group_ids: Vec<i32> = students.iter().map(|s| s.group_id).collect();

        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::UserId.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.user_id, u))
            .collect();
        let groups = self.groups_by_id(group_ids).await?;

        Ok(students
            .into_iter()
            .filter_map(|student| {
                let user = users.get(&student.student_id)?.clone();
                let group = groups.get(&student.group_id)?.clone();
                Some(Student::from_entity(student, user, group))
            })
            .collect())
    }

    async fn groups_by_id(
        &self,
        group_ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::group::Model>, DbErr> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Group::find()
            .filter(entity::group::Column::GroupId.is_in(group_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.group_id, g))
            .collect())
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::{CreateGroupParams, UpdateGroupParams};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGroupParams) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            group_code: ActiveValue::Set(params.group_code),
            name: ActiveValue::Set(params.name),
            specialty: ActiveValue::Set(params.specialty),
            course: ActiveValue::Set(params.course),
            year_of_entry: ActiveValue::Set(params.year_of_entry),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, group_id: i32) -> Result<Option<entity::group::Model>, DbErr> {
        entity::prelude::Group::find_by_id(group_id).one(self.db).await
    }

    pub async fn exists(&self, group_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Group::find_by_id(group_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether another group already uses this code.
    ///
    /// # Arguments
    /// - `group_code` - Code to look for
    /// - `exclude_group_id` - Group ignored by the check, used when renaming
    pub async fn code_exists(
        &self,
        group_code: &str,
        exclude_group_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Group::find()
            .filter(entity::group::Column::GroupCode.eq(group_code));

        if let Some(group_id) = exclude_group_id {
            query = query.filter(entity::group::Column::GroupId.ne(group_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets all groups ordered by code.
    pub async fn get_all(&self) -> Result<Vec<entity::group::Model>, DbErr> {
        entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::GroupCode)
            .all(self.db)
            .await
    }

    /// Updates the provided fields of a group.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated group
    /// - `Ok(None)` - Group not found
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateGroupParams,
    ) -> Result<Option<entity::group::Model>, DbErr> {
        let Some(group) = self.find_by_id(params.group_id).await? else {
            return Ok(None);
        };

        let mut active: entity::group::ActiveModel = group.into();
        if let Some(group_code) = params.group_code {
            active.group_code = ActiveValue::Set(group_code);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(specialty) = params.specialty {
            active.specialty = ActiveValue::Set(specialty);
        }
        if let Some(course) = params.course {
            active.course = ActiveValue::Set(course);
        }
        if let Some(year_of_entry) = params.year_of_entry {
            active.year_of_entry = ActiveValue::Set(year_of_entry);
        }

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a group; its students, assignments and their lessons cascade.
    pub async fn delete(&self, group_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Group::delete_by_id(group_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        subject_id: i32,
    ) -> Result<Option<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find_by_id(subject_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, subject_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Subject::find_by_id(subject_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all subjects ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find()
            .order_by_asc(entity::subject::Column::Name)
            .all(self.db)
            .await
    }

    /// Renames a subject, returning `None` when it does not exist.
    pub async fn update(
        &self,
        subject_id: i32,
        name: Option<String>,
    ) -> Result<Option<entity::subject::Model>, DbErr> {
        let Some(subject) = self.find_by_id(subject_id).await? else {
            return Ok(None);
        };

        let Some(name) = name else {
            return Ok(Some(subject));
        };

        let mut active: entity::subject::ActiveModel = subject.into();
        active.name = ActiveValue::Set(name);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, subject_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Subject::delete_by_id(subject_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

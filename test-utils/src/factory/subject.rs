//! Subject factory for creating test subject entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a subject with the given name.
pub async fn create_subject_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::subject::Model, DbErr> {
    entity::subject::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a subject named `"Subject {id}"`.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    create_subject_named(db, format!("Subject {}", next_id())).await
}

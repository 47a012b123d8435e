use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(pk_auto(Groups::GroupId))
                    .col(string_len_uniq(Groups::GroupCode, 15))
                    .col(string(Groups::Name).default(""))
                    .col(string(Groups::Specialty).default(""))
                    .col(integer(Groups::Course).default(1))
                    .col(integer(Groups::YearOfEntry))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Groups {
    Table,
    GroupId,
    GroupCode,
    Name,
    Specialty,
    Course,
    YearOfEntry,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::m20261003_000009_create_teaching_assignment_table::TeachingAssignment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::ScheduleId))
                    .col(integer(Schedule::TeachingAssignmentId))
                    .col(date(Schedule::Date))
                    .col(integer(Schedule::LessonNumber))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_teaching_assignment_id")
                            .from(Schedule::Table, Schedule::TeachingAssignmentId)
                            .to(
                                TeachingAssignment::Table,
                                TeachingAssignment::TeachingAssignmentId,
                            )
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: a slot is unique per group, checked in the schedule service.
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_date_lesson")
                    .table(Schedule::Table)
                    .col(Schedule::Date)
                    .col(Schedule::LessonNumber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    ScheduleId,
    TeachingAssignmentId,
    Date,
    LessonNumber,
}

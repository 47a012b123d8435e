use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261002_000007_create_student_table::Student,
    m20261003_000010_create_schedule_table::Schedule,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::AttendanceId))
                    .col(integer(Attendance::ScheduleId))
                    .col(integer(Attendance::StudentId))
                    .col(string_len(Attendance::Status, 16).default("present"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_schedule_id")
                            .from(Attendance::Table, Attendance::ScheduleId)
                            .to(Schedule::Table, Schedule::ScheduleId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_student_id")
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Student::Table, Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_schedule_student")
                    .table(Attendance::Table)
                    .col(Attendance::ScheduleId)
                    .col(Attendance::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    AttendanceId,
    ScheduleId,
    StudentId,
    Status,
}

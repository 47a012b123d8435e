use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261002_000005_create_teacher_table::Teacher, m20261002_000006_create_group_table::Groups,
    m20261002_000008_create_subject_table::Subject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeachingAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(TeachingAssignment::TeachingAssignmentId))
                    .col(integer(TeachingAssignment::TeacherId))
                    .col(integer(TeachingAssignment::GroupId))
                    .col(integer(TeachingAssignment::SubjectId))
                    .col(integer(TeachingAssignment::Semester).default(1))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_assignment_teacher_id")
                            .from(TeachingAssignment::Table, TeachingAssignment::TeacherId)
                            .to(Teacher::Table, Teacher::TeacherId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_assignment_group_id")
                            .from(TeachingAssignment::Table, TeachingAssignment::GroupId)
                            .to(Groups::Table, Groups::GroupId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teaching_assignment_subject_id")
                            .from(TeachingAssignment::Table, TeachingAssignment::SubjectId)
                            .to(Subject::Table, Subject::SubjectId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teaching_assignment_unique")
                    .table(TeachingAssignment::Table)
                    .col(TeachingAssignment::TeacherId)
                    .col(TeachingAssignment::GroupId)
                    .col(TeachingAssignment::SubjectId)
                    .col(TeachingAssignment::Semester)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeachingAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeachingAssignment {
    Table,
    TeachingAssignmentId,
    TeacherId,
    GroupId,
    SubjectId,
    Semester,
}

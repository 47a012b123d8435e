pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_credentials_table;
mod m20261001_000003_create_user_role_table;
mod m20261001_000004_create_session_table;
mod m20261002_000005_create_teacher_table;
mod m20261002_000006_create_group_table;
mod m20261002_000007_create_student_table;
mod m20261002_000008_create_subject_table;
mod m20261003_000009_create_teaching_assignment_table;
mod m20261003_000010_create_schedule_table;
mod m20261003_000011_create_attendance_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_credentials_table::Migration),
            Box::new(m20261001_000003_create_user_role_table::Migration),
            Box::new(m20261001_000004_create_session_table::Migration),
            Box::new(m20261002_000005_create_teacher_table::Migration),
            Box::new(m20261002_000006_create_group_table::Migration),
            Box::new(m20261002_000007_create_student_table::Migration),
            Box::new(m20261002_000008_create_subject_table::Migration),
            Box::new(m20261003_000009_create_teaching_assignment_table::Migration),
            Box::new(m20261003_000010_create_schedule_table::Migration),
            Box::new(m20261003_000011_create_attendance_table::Migration),
        ]
    }
}

//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation for default values and convenience methods for
//! creating entities together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Everything a teaching assignment depends on, plus the assignment itself.
pub struct AssignmentDependencies {
    pub teacher_user: entity::user::Model,
    pub teacher: entity::teacher::Model,
    pub group: entity::group::Model,
    pub subject: entity::subject::Model,
    pub assignment: entity::teaching_assignment::Model,
}

/// Creates a teaching assignment with a fresh teacher, group and subject.
///
/// All entities are created with default values. Use the individual factories
/// when specific values matter to the test.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(AssignmentDependencies)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_assignment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<AssignmentDependencies, DbErr> {
    let (teacher_user, teacher) = crate::factory::teacher::create_teacher(db).await?;
    let group = crate::factory::group::create_group(db).await?;
    let subject = crate::factory::subject::create_subject(db).await?;
    let assignment = crate::factory::teaching_assignment::create_teaching_assignment(
        db,
        teacher.teacher_id,
        group.group_id,
        subject.subject_id,
    )
    .await?;

    Ok(AssignmentDependencies {
        teacher_user,
        teacher,
        group,
        subject,
        assignment,
    })
}

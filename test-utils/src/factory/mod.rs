//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that represent a role of a user (teachers and
//! students) insert the backing `user` row as well.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let group = factory::group::create_group(&db).await?;
//!     let (user, student) = factory::student::create_student(&db, group.group_id).await?;
//!
//!     // Create an assignment with everything it references
//!     let deps = factory::helpers::create_assignment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let group = factory::group::GroupFactory::new(&db)
//!     .group_code("PI-101")
//!     .course(2)
//!     .build()
//!     .await?;
//! ```

pub mod attendance;
pub mod credentials;
pub mod group;
pub mod helpers;
pub mod schedule;
pub mod session;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;
pub mod user;

pub use attendance::create_attendance;
pub use group::create_group;
pub use schedule::create_schedule;
pub use session::create_session;
pub use student::create_student;
pub use subject::create_subject;
pub use teacher::create_teacher;
pub use teaching_assignment::create_teaching_assignment;
pub use user::create_user;

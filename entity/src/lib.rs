//! SeaORM entities for the academic administration schema.
//!
//! Each module mirrors one table created by the `migration` crate. Relations are
//! declared with cascading deletes so schemas generated from these entities (as
//! the test utilities do) match the migrated database.

pub mod prelude;

pub mod attendance;
pub mod credentials;
pub mod group;
pub mod schedule;
pub mod session;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;
pub mod user;
pub mod user_role;

//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! or to-be-validated input from controllers into services.

pub mod attendance;
pub mod group;
pub mod schedule;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;
pub mod user;

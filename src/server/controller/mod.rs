//! HTTP handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs to params, call a
//! service and convert the returned domain model back to a DTO. Every handler
//! carries a `utoipa::path` annotation picked up by the router.

pub mod attendance;
pub mod auth;
pub mod group;
pub mod schedule;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;

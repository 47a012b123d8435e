//! Request and response DTOs of the REST API.
//!
//! Every type here serializes with camelCase field names and derives `ToSchema`
//! so it shows up in the generated OpenAPI document.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod group;
pub mod schedule;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Field ranges, required names, group code format
//! - **Reference checks**: Referenced teachers, groups, subjects and lessons must exist (404)
//! - **Conflict checks**: Duplicate names, codes, assignments, schedule slots and records (409)
//! - **Aggregation**: Attendance journals and group statistics

pub mod attendance;
pub mod auth;
pub mod group;
pub mod schedule;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;

#[cfg(test)]
mod test;

//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models or entity models to the service layer. All database queries, inserts,
//! updates, and deletes are performed through these repositories.

pub mod attendance;
pub mod group;
pub mod schedule;
pub mod session;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;
pub mod user;

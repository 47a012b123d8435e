//! Academia Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the academia
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for seeding data.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_group_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let group = factory::group::create_group(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

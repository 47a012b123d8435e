use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Subject};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Subject)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the table from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user, credentials, role and session tables.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User)
            .with_table(Credentials)
            .with_table(UserRole)
            .with_table(Session)
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Most repository and service tests need the full relation chain from users
    /// down to attendance records, so this is the usual starting point.
    pub fn with_academic_tables(self) -> Self {
        self.with_auth_tables()
            .with_table(Teacher)
            .with_table(Group)
            .with_table(Student)
            .with_table(Subject)
            .with_table(TeachingAssignment)
            .with_table(Schedule)
            .with_table(Attendance)
    }

    /// Builds the test context by creating the database and configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with tables created
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

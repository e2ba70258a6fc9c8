use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Student, Presence};
///
/// let test = TestBuilder::new()
///     .with_table(Student)
///     .with_table(Presence)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency
    /// order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for student progression operations:
    /// Student and Presence.
    pub fn with_student_tables(self) -> Self {
        self.with_table(Student).with_table(Presence)
    }

    /// Adds the tables required for attendance marking operations:
    /// Student, Presence, ClassSession, and ClassAttendee.
    pub fn with_attendance_tables(self) -> Self {
        self.with_student_tables()
            .with_table(ClassSession)
            .with_table(ClassAttendee)
    }

    /// Adds the tables required for authentication flows:
    /// Student, Presence, Teacher, and AuthToken.
    pub fn with_auth_tables(self) -> Self {
        self.with_student_tables()
            .with_table(Teacher)
            .with_table(AuthToken)
    }

    /// Builds the configured test context.
    ///
    /// Creates the in-memory database and executes all configured CREATE
    /// TABLE statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test environment
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add the entity tables a test needs, then call `build()` to create an in-memory
/// SQLite database containing them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Property, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Property)
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
    /// Tables referenced by foreign keys must be added before the tables that
    /// reference them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and property tables along with the amenity join table.
    ///
    /// Use this for listing tests that do not touch inquiries or favorites.
    pub fn with_property_tables(self) -> Self {
        self.with_table(User)
            .with_table(Property)
            .with_table(PropertyAmenity)
    }

    /// Adds every table of the application in dependency order:
    /// - User
    /// - Property
    /// - PropertyAmenity
    /// - Inquiry
    /// - Favorite
    pub fn with_all_tables(self) -> Self {
        self.with_property_tables()
            .with_table(Inquiry)
            .with_table(Favorite)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Character, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Character)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema
    /// builder. Statements are executed in the order they were added during
    /// `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Chain method calls to configure the test environment before calling
    /// `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables should be added in dependency order (tables
    /// with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the catalog tables (Character, Planet, Starship).
    ///
    /// Use this when testing catalog functionality that doesn't involve users
    /// or favorites.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Character)
            .with_table(Planet)
            .with_table(Starship)
    }

    /// Adds all tables required for favorite operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Character, Planet, Starship
    /// - FavoriteCharacter, FavoritePlanet, FavoriteStarship
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_favorite_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_favorite_tables(self) -> Self {
        self.with_table(User)
            .with_catalog_tables()
            .with_table(FavoriteCharacter)
            .with_table(FavoritePlanet)
            .with_table(FavoriteStarship)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE
    /// TABLE statements that were added via `with_table()`, in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context ready for use
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

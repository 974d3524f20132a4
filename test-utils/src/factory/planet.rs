//! Planet factory for creating test catalog planets.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    diameter: Option<i32>,
    population: Option<i32>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Planet {id}"` where id is auto-incremented
    /// - diameter: `Some(12_500)`
    /// - population: `Some(1_000_000)`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PlanetFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            diameter: Some(12_500),
            population: Some(1_000_000),
        }
    }

    /// Sets the name, which must be unique across the store.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the diameter in kilometers, or None to leave unset.
    pub fn diameter(mut self, diameter: Option<i32>) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets the population, or None to leave unset.
    pub fn population(mut self, population: Option<i32>) -> Self {
        self.population = population;
        self
    }

    /// Builds and inserts the planet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - Created planet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            diameter: ActiveValue::Set(self.diameter),
            population: ActiveValue::Set(self.population),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
///
/// Shorthand for `PlanetFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::planet::Model)` - Created planet entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}

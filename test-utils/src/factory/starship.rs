//! Starship factory for creating test catalog starships.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test starships with customizable fields.
pub struct StarshipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> StarshipFactory<'a> {
    /// Creates a new StarshipFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Starship {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StarshipFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Starship {}", id),
        }
    }

    /// Sets the name, which must be unique across the store.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the starship entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::starship::Model)` - Created starship entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a starship with default values.
///
/// Shorthand for `StarshipFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::starship::Model)` - Created starship entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_starship(db: &DatabaseConnection) -> Result<entity::starship::Model, DbErr> {
    StarshipFactory::new(db).build().await
}

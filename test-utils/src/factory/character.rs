//! Character factory for creating test catalog characters.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    height: Option<i32>,
    weight: Option<i32>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"` where id is auto-incremented
    /// - height: `Some(180)`
    /// - weight: `Some(80)`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CharacterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Character {}", id),
            height: Some(180),
            weight: Some(80),
        }
    }

    /// Sets the name, which must be unique across the store.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the height in centimeters, or None to leave unset.
    pub fn height(mut self, height: Option<i32>) -> Self {
        self.height = height;
        self
    }

    /// Sets the weight in kilograms, or None to leave unset.
    pub fn weight(mut self, weight: Option<i32>) -> Self {
        self.weight = weight;
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            height: ActiveValue::Set(self.height),
            weight: ActiveValue::Set(self.weight),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::character::Model)` - Created character entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}

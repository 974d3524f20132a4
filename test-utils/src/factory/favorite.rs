//! Favorite factories linking users to catalog items.
//!
//! These factories insert join rows directly; the referenced user and catalog
//! item must already exist (use the other factories first).

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite-character join row for the given user and character.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of an existing user
/// - `character_id` - Id of an existing character
///
/// # Returns
/// - `Ok(entity::favorite_character::Model)` - Created join row
/// - `Err(DbErr)` - Database error during insert (e.g. FK violation)
pub async fn create_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite_character::Model, DbErr> {
    entity::favorite_character::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a favorite-planet join row for the given user and planet.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of an existing user
/// - `planet_id` - Id of an existing planet
///
/// # Returns
/// - `Ok(entity::favorite_planet::Model)` - Created join row
/// - `Err(DbErr)` - Database error during insert (e.g. FK violation)
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite_planet::Model, DbErr> {
    entity::favorite_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a favorite-starship join row for the given user and starship.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of an existing user
/// - `starship_id` - Id of an existing starship
///
/// # Returns
/// - `Ok(entity::favorite_starship::Model)` - Created join row
/// - `Err(DbErr)` - Database error during insert (e.g. FK violation)
pub async fn create_favorite_starship(
    db: &DatabaseConnection,
    user_id: i32,
    starship_id: i32,
) -> Result<entity::favorite_starship::Model, DbErr> {
    entity::favorite_starship::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        starship_id: ActiveValue::Set(starship_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

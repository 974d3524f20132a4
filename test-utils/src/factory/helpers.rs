//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// email or name to prevent collisions with the schema's unique constraints.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with one favorited character.
///
/// This is a convenience method that creates:
/// 1. User
/// 2. Character
/// 3. FavoriteCharacter linking the two
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, character, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorite_character(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::character::Model,
        entity::favorite_character::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let character = crate::factory::character::create_character(db).await?;
    let favorite =
        crate::factory::favorite::create_favorite_character(db, user.id, character.id).await?;

    Ok((user, character, favorite))
}

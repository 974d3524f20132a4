use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Transport representation of a favorite-character join record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

/// Transport representation of a favorite-planet join record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

/// Transport representation of a favorite-starship join record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteStarshipDto {
    pub id: i32,
    pub user_id: i32,
    pub starship_id: i32,
}

/// Request body for favoriting a character.
///
/// Fields are optional so presence validation can name the missing field.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFavoriteCharacterDto {
    pub user_id: Option<i32>,
    pub character_id: Option<i32>,
}

/// Request body for favoriting a planet.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFavoritePlanetDto {
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
}

/// Request body for favoriting a starship.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFavoriteStarshipDto {
    pub user_id: Option<i32>,
    pub starship_id: Option<i32>,
}

/// All of one user's favorites, grouped by catalog kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub favorites_characters: Vec<FavoriteCharacterDto>,
    pub favorites_planets: Vec<FavoritePlanetDto>,
    pub favorites_starships: Vec<FavoriteStarshipDto>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Transport representation of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
}

/// Transport representation of a planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub population: Option<i32>,
}

/// Transport representation of a starship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
}

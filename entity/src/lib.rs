//! SeaORM entity definitions for the holocron catalog schema.
//!
//! One module per table. Relationships are declared as foreign-key edges and
//! resolved through join queries; entities never hold references to each other.

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod favorite_starship;
pub mod planet;
pub mod starship;
pub mod user;

pub mod prelude {
    pub use super::character::Entity as Character;
    pub use super::favorite_character::Entity as FavoriteCharacter;
    pub use super::favorite_planet::Entity as FavoritePlanet;
    pub use super::favorite_starship::Entity as FavoriteStarship;
    pub use super::planet::Entity as Planet;
    pub use super::starship::Entity as Starship;
    pub use super::user::Entity as User;
}

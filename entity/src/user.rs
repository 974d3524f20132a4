use sea_orm::entity::prelude::*;

/// Application user. The password is stored as an argon2 digest and never
/// leaves the data layer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_character::Entity")]
    FavoriteCharacter,
    #[sea_orm(has_many = "super::favorite_planet::Entity")]
    FavoritePlanet,
    #[sea_orm(has_many = "super::favorite_starship::Entity")]
    FavoriteStarship,
}

impl Related<super::favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacter.def()
    }
}

impl Related<super::favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritePlanet.def()
    }
}

impl Related<super::favorite_starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteStarship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite_starship::Entity")]
    FavoriteStarship,
}

impl Related<super::favorite_starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteStarship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

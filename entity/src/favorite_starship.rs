use sea_orm::entity::prelude::*;

/// Join row recording one user's favoriting of one starship.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub starship_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::starship::Entity",
        from = "Column::StarshipId",
        to = "super::starship::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Starship,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

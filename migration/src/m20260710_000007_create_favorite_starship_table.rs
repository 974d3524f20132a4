use sea_orm_migration::{prelude::*, schema::*};

use super::m20260710_000001_create_user_table::User;
use super::m20260710_000004_create_starship_table::Starship;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteStarship::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteStarship::Id))
                    .col(integer(FavoriteStarship::UserId))
                    .col(integer(FavoriteStarship::StarshipId))
                    .col(timestamp_with_time_zone(FavoriteStarship::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_starship_user_id")
                            .from(FavoriteStarship::Table, FavoriteStarship::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_starship_starship_id")
                            .from(FavoriteStarship::Table, FavoriteStarship::StarshipId)
                            .to(Starship::Table, Starship::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteStarship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteStarship {
    Table,
    Id,
    UserId,
    StarshipId,
    CreatedAt,
}

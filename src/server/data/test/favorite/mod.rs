use crate::server::{
    data::favorite::FavoriteRepository,
    error::{data::DataError, AppError},
    model::favorite::CreateFavoriteParam,
};
use entity::prelude::{FavoriteCharacter, FavoritePlanet, FavoriteStarship};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_user;

/// Builds create parameters for a favorite of any kind.
fn param(user_id: i32, item_id: i32) -> CreateFavoriteParam {
    CreateFavoriteParam { user_id, item_id }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{FavoriteCharacter, FavoritePlanet, FavoriteStarship};

use crate::{
    model::favorite::{
        CreateFavoriteCharacterDto, CreateFavoritePlanetDto, CreateFavoriteStarshipDto,
        FavoriteCharacterDto, FavoritePlanetDto, FavoriteStarshipDto, UserFavoritesDto,
    },
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::AppError,
        model::favorite::{CreateFavoriteParam, Favorite},
        state::AppState,
    },
};

/// GET /api/users/{id}/favorites - Get all of a user's favorites
///
/// Returns the user's favorites of every catalog kind, grouped by kind.
///
/// # Path Parameters
/// - `id`: User id (i32)
///
/// # Returns
/// - `200 OK`: UserFavoritesDto
/// - `404 Not Found`: No user with this id
#[utoipa::path(
    get,
    path = "/api/users/{id}/favorites",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's favorites", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = UserRepository::new(&state.db).get_favorites(id).await?;

    Ok((StatusCode::OK, Json(favorites.into_dto())))
}

/// GET /api/users/{id}/favorites/characters - Get a user's favorite characters
///
/// # Path Parameters
/// - `id`: User id (i32)
///
/// # Returns
/// - `200 OK`: JSON array of FavoriteCharacterDto
/// - `404 Not Found`: No user with this id
#[utoipa::path(
    get,
    path = "/api/users/{id}/favorites/characters",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's favorite characters", body = [FavoriteCharacterDto]),
        (status = 404, description = "User not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn get_user_favorite_characters(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserRepository::new(&state.db).get_by_id(id).await?;

    let favorites = FavoriteRepository::<FavoriteCharacter>::new(&state.db)
        .get_by_user(id)
        .await?;

    let dtos: Vec<FavoriteCharacterDto> = favorites
        .into_iter()
        .map(Favorite::into_character_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/users/{id}/favorites/planets - Get a user's favorite planets
///
/// # Path Parameters
/// - `id`: User id (i32)
///
/// # Returns
/// - `200 OK`: JSON array of FavoritePlanetDto
/// - `404 Not Found`: No user with this id
#[utoipa::path(
    get,
    path = "/api/users/{id}/favorites/planets",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's favorite planets", body = [FavoritePlanetDto]),
        (status = 404, description = "User not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn get_user_favorite_planets(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserRepository::new(&state.db).get_by_id(id).await?;

    let favorites = FavoriteRepository::<FavoritePlanet>::new(&state.db)
        .get_by_user(id)
        .await?;

    let dtos: Vec<FavoritePlanetDto> = favorites
        .into_iter()
        .map(Favorite::into_planet_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/users/{id}/favorites/starships - Get a user's favorite starships
///
/// # Path Parameters
/// - `id`: User id (i32)
///
/// # Returns
/// - `200 OK`: JSON array of FavoriteStarshipDto
/// - `404 Not Found`: No user with this id
#[utoipa::path(
    get,
    path = "/api/users/{id}/favorites/starships",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's favorite starships", body = [FavoriteStarshipDto]),
        (status = 404, description = "User not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn get_user_favorite_starships(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserRepository::new(&state.db).get_by_id(id).await?;

    let favorites = FavoriteRepository::<FavoriteStarship>::new(&state.db)
        .get_by_user(id)
        .await?;

    let dtos: Vec<FavoriteStarshipDto> = favorites
        .into_iter()
        .map(Favorite::into_starship_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/favorites/character - Favorite a character
///
/// Requires `user_id` and `character_id`; both must resolve to existing
/// records. The same pair may be favorited more than once.
///
/// # Returns
/// - `201 Created`: FavoriteCharacterDto of the new join record
/// - `400 Bad Request`: A required field is missing
/// - `404 Not Found`: The user or character does not exist
#[utoipa::path(
    post,
    path = "/api/favorites/character",
    request_body = CreateFavoriteCharacterDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteCharacterDto),
        (status = 400, description = "Missing required field", body = crate::model::api::ErrorDto),
        (status = 404, description = "User or character not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn create_favorite_character(
    State(state): State<AppState>,
    Json(dto): Json<CreateFavoriteCharacterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFavoriteParam::try_from(dto)?;

    let favorite = FavoriteRepository::<FavoriteCharacter>::new(&state.db)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_character_dto())))
}

/// DELETE /api/favorites/character/{favorite_id} - Remove a favorite character
///
/// Deletes one join record by its own id; other favorites of the same pair
/// are untouched.
///
/// # Path Parameters
/// - `favorite_id`: Id of the join record (i32)
///
/// # Returns
/// - `204 No Content`: Favorite deleted
/// - `404 Not Found`: No favorite with this id
#[utoipa::path(
    delete,
    path = "/api/favorites/character/{favorite_id}",
    params(("favorite_id" = i32, Path, description = "Favorite id")),
    responses(
        (status = 204, description = "Favorite deleted"),
        (status = 404, description = "Favorite not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteRepository::<FavoriteCharacter>::new(&state.db)
        .delete(favorite_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/favorites/planet - Favorite a planet
///
/// # Returns
/// - `201 Created`: FavoritePlanetDto of the new join record
/// - `400 Bad Request`: A required field is missing
/// - `404 Not Found`: The user or planet does not exist
#[utoipa::path(
    post,
    path = "/api/favorites/planet",
    request_body = CreateFavoritePlanetDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoritePlanetDto),
        (status = 400, description = "Missing required field", body = crate::model::api::ErrorDto),
        (status = 404, description = "User or planet not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn create_favorite_planet(
    State(state): State<AppState>,
    Json(dto): Json<CreateFavoritePlanetDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFavoriteParam::try_from(dto)?;

    let favorite = FavoriteRepository::<FavoritePlanet>::new(&state.db)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_planet_dto())))
}

/// DELETE /api/favorites/planet/{favorite_id} - Remove a favorite planet
///
/// # Path Parameters
/// - `favorite_id`: Id of the join record (i32)
///
/// # Returns
/// - `204 No Content`: Favorite deleted
/// - `404 Not Found`: No favorite with this id
#[utoipa::path(
    delete,
    path = "/api/favorites/planet/{favorite_id}",
    params(("favorite_id" = i32, Path, description = "Favorite id")),
    responses(
        (status = 204, description = "Favorite deleted"),
        (status = 404, description = "Favorite not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteRepository::<FavoritePlanet>::new(&state.db)
        .delete(favorite_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/favorites/starship - Favorite a starship
///
/// # Returns
/// - `201 Created`: FavoriteStarshipDto of the new join record
/// - `400 Bad Request`: A required field is missing
/// - `404 Not Found`: The user or starship does not exist
#[utoipa::path(
    post,
    path = "/api/favorites/starship",
    request_body = CreateFavoriteStarshipDto,
    responses(
        (status = 201, description = "Favorite created", body = FavoriteStarshipDto),
        (status = 400, description = "Missing required field", body = crate::model::api::ErrorDto),
        (status = 404, description = "User or starship not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn create_favorite_starship(
    State(state): State<AppState>,
    Json(dto): Json<CreateFavoriteStarshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateFavoriteParam::try_from(dto)?;

    let favorite = FavoriteRepository::<FavoriteStarship>::new(&state.db)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_starship_dto())))
}

/// DELETE /api/favorites/starship/{favorite_id} - Remove a favorite starship
///
/// # Path Parameters
/// - `favorite_id`: Id of the join record (i32)
///
/// # Returns
/// - `204 No Content`: Favorite deleted
/// - `404 Not Found`: No favorite with this id
#[utoipa::path(
    delete,
    path = "/api/favorites/starship/{favorite_id}",
    params(("favorite_id" = i32, Path, description = "Favorite id")),
    responses(
        (status = 204, description = "Favorite deleted"),
        (status = 404, description = "Favorite not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn delete_favorite_starship(
    State(state): State<AppState>,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FavoriteRepository::<FavoriteStarship>::new(&state.db)
        .delete(favorite_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

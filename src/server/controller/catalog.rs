use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::prelude::{Character, Planet, Starship};

use crate::{
    model::catalog::{CharacterDto, PlanetDto, StarshipDto},
    server::{data::catalog::CatalogRepository, error::AppError, state::AppState},
};

/// GET /api/characters - Get all characters
///
/// # Returns
/// - `200 OK`: JSON array of CharacterDto, ordered by id
#[utoipa::path(
    get,
    path = "/api/characters",
    responses(
        (status = 200, description = "All characters", body = [CharacterDto])
    )
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CatalogRepository::<Character>::new(&state.db).get_all().await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/characters/{id} - Get a single character by id
///
/// # Path Parameters
/// - `id`: Character id (i32)
///
/// # Returns
/// - `200 OK`: CharacterDto
/// - `404 Not Found`: No character with this id
#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "Character found", body = CharacterDto),
        (status = 404, description = "Character not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn get_character_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CatalogRepository::<Character>::new(&state.db)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// GET /api/planets - Get all planets
///
/// # Returns
/// - `200 OK`: JSON array of PlanetDto, ordered by id
#[utoipa::path(
    get,
    path = "/api/planets",
    responses(
        (status = 200, description = "All planets", body = [PlanetDto])
    )
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = CatalogRepository::<Planet>::new(&state.db).get_all().await?;

    let dtos: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/planets/{id} - Get a single planet by id
///
/// # Path Parameters
/// - `id`: Planet id (i32)
///
/// # Returns
/// - `200 OK`: PlanetDto
/// - `404 Not Found`: No planet with this id
#[utoipa::path(
    get,
    path = "/api/planets/{id}",
    params(("id" = i32, Path, description = "Planet id")),
    responses(
        (status = 200, description = "Planet found", body = PlanetDto),
        (status = 404, description = "Planet not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = CatalogRepository::<Planet>::new(&state.db)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// GET /api/starships - Get all starships
///
/// # Returns
/// - `200 OK`: JSON array of StarshipDto, ordered by id
#[utoipa::path(
    get,
    path = "/api/starships",
    responses(
        (status = 200, description = "All starships", body = [StarshipDto])
    )
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let starships = CatalogRepository::<Starship>::new(&state.db).get_all().await?;

    let dtos: Vec<StarshipDto> = starships.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/starships/{id} - Get a single starship by id
///
/// # Path Parameters
/// - `id`: Starship id (i32)
///
/// # Returns
/// - `200 OK`: StarshipDto
/// - `404 Not Found`: No starship with this id
#[utoipa::path(
    get,
    path = "/api/starships/{id}",
    params(("id" = i32, Path, description = "Starship id")),
    responses(
        (status = 200, description = "Starship found", body = StarshipDto),
        (status = 404, description = "Starship not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn get_starship_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let starship = CatalogRepository::<Starship>::new(&state.db)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(starship.into_dto())))
}

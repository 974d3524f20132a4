use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api, catalog, favorite, user},
    server::{
        controller::{
            catalog as catalog_controller, favorite as favorite_controller,
            user as user_controller,
        },
        state::AppState,
    },
};

/// OpenAPI document covering the whole endpoint surface, served through
/// Swagger UI at `/docs`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::user::get_users,
        crate::server::controller::user::get_user_by_id,
        crate::server::controller::user::create_user,
        crate::server::controller::user::delete_user,
        crate::server::controller::catalog::get_characters,
        crate::server::controller::catalog::get_character_by_id,
        crate::server::controller::catalog::get_planets,
        crate::server::controller::catalog::get_planet_by_id,
        crate::server::controller::catalog::get_starships,
        crate::server::controller::catalog::get_starship_by_id,
        crate::server::controller::favorite::get_user_favorites,
        crate::server::controller::favorite::get_user_favorite_characters,
        crate::server::controller::favorite::get_user_favorite_planets,
        crate::server::controller::favorite::get_user_favorite_starships,
        crate::server::controller::favorite::create_favorite_character,
        crate::server::controller::favorite::delete_favorite_character,
        crate::server::controller::favorite::create_favorite_planet,
        crate::server::controller::favorite::delete_favorite_planet,
        crate::server::controller::favorite::create_favorite_starship,
        crate::server::controller::favorite::delete_favorite_starship,
    ),
    components(schemas(
        api::ErrorDto,
        user::UserDto,
        user::CreateUserDto,
        catalog::CharacterDto,
        catalog::PlanetDto,
        catalog::StarshipDto,
        favorite::FavoriteCharacterDto,
        favorite::FavoritePlanetDto,
        favorite::FavoriteStarshipDto,
        favorite::CreateFavoriteCharacterDto,
        favorite::CreateFavoritePlanetDto,
        favorite::CreateFavoriteStarshipDto,
        favorite::UserFavoritesDto,
    ))
)]
struct ApiDoc;

/// Builds the application router with all routes, CORS, and API docs.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/users",
            get(user_controller::get_users).post(user_controller::create_user),
        )
        .route(
            "/api/users/{id}",
            get(user_controller::get_user_by_id).delete(user_controller::delete_user),
        )
        .route(
            "/api/users/{id}/favorites",
            get(favorite_controller::get_user_favorites),
        )
        .route(
            "/api/users/{id}/favorites/characters",
            get(favorite_controller::get_user_favorite_characters),
        )
        .route(
            "/api/users/{id}/favorites/planets",
            get(favorite_controller::get_user_favorite_planets),
        )
        .route(
            "/api/users/{id}/favorites/starships",
            get(favorite_controller::get_user_favorite_starships),
        )
        .route("/api/characters", get(catalog_controller::get_characters))
        .route(
            "/api/characters/{id}",
            get(catalog_controller::get_character_by_id),
        )
        .route("/api/planets", get(catalog_controller::get_planets))
        .route(
            "/api/planets/{id}",
            get(catalog_controller::get_planet_by_id),
        )
        .route("/api/starships", get(catalog_controller::get_starships))
        .route(
            "/api/starships/{id}",
            get(catalog_controller::get_starship_by_id),
        )
        .route(
            "/api/favorites/character",
            post(favorite_controller::create_favorite_character),
        )
        .route(
            "/api/favorites/character/{favorite_id}",
            delete(favorite_controller::delete_favorite_character),
        )
        .route(
            "/api/favorites/planet",
            post(favorite_controller::create_favorite_planet),
        )
        .route(
            "/api/favorites/planet/{favorite_id}",
            delete(favorite_controller::delete_favorite_planet),
        )
        .route(
            "/api/favorites/starship",
            post(favorite_controller::create_favorite_starship),
        )
        .route(
            "/api/favorites/starship/{favorite_id}",
            delete(favorite_controller::delete_favorite_starship),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}

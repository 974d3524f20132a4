use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, User},
        state::AppState,
    },
};

/// GET /api/users - Get all users
///
/// Returns every user in the store, ordered by id. Serialized users never
/// include credential material.
///
/// # Returns
/// - `200 OK`: JSON array of UserDto
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserDto])
    )
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserRepository::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/users/{id} - Get a single user by id
///
/// # Path Parameters
/// - `id`: User id (i32)
///
/// # Returns
/// - `200 OK`: UserDto
/// - `404 Not Found`: No user with this id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserRepository::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/users - Create a new user
///
/// Requires `email` and `password`; `is_active` defaults to true. The password
/// is hashed before storage and absent from the response.
///
/// # Returns
/// - `201 Created`: UserDto of the new user
/// - `400 Bad Request`: A required field is missing
/// - `409 Conflict`: Another user already holds this email
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing required field", body = crate::model::api::ErrorDto),
        (status = 409, description = "Email already taken", body = crate::model::api::ErrorDto)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParam::try_from(dto)?;

    let user = UserRepository::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// DELETE /api/users/{id} - Delete a user
///
/// The user's favorites of every kind are removed with them.
///
/// # Path Parameters
/// - `id`: User id (i32)
///
/// # Returns
/// - `204 No Content`: User deleted
/// - `404 Not Found`: No user with this id
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = crate::model::api::ErrorDto)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserRepository::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

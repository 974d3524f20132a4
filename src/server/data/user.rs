//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. It
//! handles creation with password hashing, queries, deletion, and the
//! relationship traversal that collects a user's favorites across all catalog
//! kinds.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use entity::prelude::{FavoriteCharacter, FavoritePlanet, FavoriteStarship};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::{favorite::FavoriteRepository, map_unique_violation},
    error::{data::DataError, AppError},
    model::{
        favorite::UserFavorites,
        user::{CreateUserParam, User},
    },
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides
/// methods for creating, reading, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user.
    ///
    /// Hashes the password with argon2 before storage; the plaintext never
    /// reaches the database. The insert is a single statement, so a failed
    /// create leaves no partial record behind.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing email, password and active flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(AppError::DataErr(UniqueViolation))` - Another user already holds
    ///   this email
    /// - `Err(AppError)` - Other database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let password_hash = hash_password(&param.password)?;

        let result = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(password_hash),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(model) => Ok(User::from_entity(model)),
            Err(err) => Err(map_unique_violation(err, "user", "email")),
        }
    }

    /// Gets all users, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All user records
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Gets a single user by id.
    ///
    /// # Arguments
    /// - `id` - Id of the user to fetch
    ///
    /// # Returns
    /// - `Ok(User)` - The user record
    /// - `Err(AppError::DataErr(NotFound))` - No user exists with this id
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DataError::NotFound { entity: "user", id })?;

        Ok(User::from_entity(user))
    }

    /// Deletes a user by id.
    ///
    /// The user's favorite-join rows of every kind are removed with it via the
    /// schema's cascading foreign keys, so no orphaned favorites remain.
    ///
    /// # Arguments
    /// - `id` - Id of the user to delete
    ///
    /// # Returns
    /// - `Ok(())` - User and their favorites deleted
    /// - `Err(AppError::DataErr(NotFound))` - No user exists with this id
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound { entity: "user", id }.into());
        }

        Ok(())
    }

    /// Gets all of a user's favorites across the three catalog kinds.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user whose favorites to collect
    ///
    /// # Returns
    /// - `Ok(UserFavorites)` - The user's favorites grouped by kind
    /// - `Err(AppError::DataErr(NotFound))` - No user exists with this id
    /// - `Err(AppError)` - Database error during query
    pub async fn get_favorites(&self, user_id: i32) -> Result<UserFavorites, AppError> {
        self.get_by_id(user_id).await?;

        Ok(UserFavorites {
            characters: FavoriteRepository::<FavoriteCharacter>::new(self.db)
                .get_by_user(user_id)
                .await?,
            planets: FavoriteRepository::<FavoritePlanet>::new(self.db)
                .get_by_user(user_id)
                .await?,
            starships: FavoriteRepository::<FavoriteStarship>::new(self.db)
                .get_by_user(user_id)
                .await?,
        })
    }
}

/// Hashes a plaintext password with argon2id and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalError(format!("Failed to hash password: {err}")))
}

//! Favorite data repository for database operations.
//!
//! Favorites form a many-to-many relation between users and each catalog kind,
//! stored as first-class join rows so every favorite can be deleted by its own
//! id. One generic `FavoriteRepository` parameterized by a `FavoriteKind`
//! implementation covers all three kinds; only the per-kind trait impls below
//! differ between them.

use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, IntoActiveModel, PrimaryKeyTrait, QueryFilter,
};

use crate::server::{
    error::{data::DataError, AppError},
    model::favorite::{CreateFavoriteParam, Favorite},
};

/// One favorite kind, implemented by each favorite join entity.
///
/// Supplies the entity-specific pieces the generic repository cannot derive:
/// the catalog entity the join rows point at, the column mapping, and the
/// entity-to-domain conversion. Adding a catalog kind means one entity and one
/// impl of this trait.
pub trait FavoriteKind: EntityTrait
where
    Self::Model: IntoActiveModel<<Self as FavoriteKind>::ActiveModel>,
    <Self::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    <<Self::Catalog as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    /// Catalog entity the join rows reference.
    type Catalog: EntityTrait;
    /// Active model used for inserts.
    type ActiveModel: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send;

    /// Catalog kind name used in error messages, e.g. "character".
    const CATALOG_NAME: &'static str;

    /// Column holding the favoriting user's id.
    fn user_id_column() -> Self::Column;

    /// Builds the active model for an insert.
    fn active_model(user_id: i32, item_id: i32) -> <Self as FavoriteKind>::ActiveModel;

    /// Converts an entity model to the uniform favorite domain model.
    fn to_favorite(model: Self::Model) -> Favorite;
}

impl FavoriteKind for entity::favorite_character::Entity {
    type Catalog = entity::character::Entity;
    type ActiveModel = entity::favorite_character::ActiveModel;

    const CATALOG_NAME: &'static str = "character";

    fn user_id_column() -> Self::Column {
        entity::favorite_character::Column::UserId
    }

    fn active_model(user_id: i32, item_id: i32) -> <Self as FavoriteKind>::ActiveModel {
        entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(item_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    fn to_favorite(model: Self::Model) -> Favorite {
        Favorite {
            id: model.id,
            user_id: model.user_id,
            item_id: model.character_id,
        }
    }
}

impl FavoriteKind for entity::favorite_planet::Entity {
    type Catalog = entity::planet::Entity;
    type ActiveModel = entity::favorite_planet::ActiveModel;

    const CATALOG_NAME: &'static str = "planet";

    fn user_id_column() -> Self::Column {
        entity::favorite_planet::Column::UserId
    }

    fn active_model(user_id: i32, item_id: i32) -> <Self as FavoriteKind>::ActiveModel {
        entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(item_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    fn to_favorite(model: Self::Model) -> Favorite {
        Favorite {
            id: model.id,
            user_id: model.user_id,
            item_id: model.planet_id,
        }
    }
}

impl FavoriteKind for entity::favorite_starship::Entity {
    type Catalog = entity::starship::Entity;
    type ActiveModel = entity::favorite_starship::ActiveModel;

    const CATALOG_NAME: &'static str = "starship";

    fn user_id_column() -> Self::Column {
        entity::favorite_starship::Column::UserId
    }

    fn active_model(user_id: i32, item_id: i32) -> <Self as FavoriteKind>::ActiveModel {
        entity::favorite_starship::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            starship_id: ActiveValue::Set(item_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    fn to_favorite(model: Self::Model) -> Favorite {
        Favorite {
            id: model.id,
            user_id: model.user_id,
            item_id: model.starship_id,
        }
    }
}

/// Repository providing database operations for one favorite kind.
///
/// This struct holds a reference to the database connection and provides
/// methods for creating, deleting, and listing favorite join records.
/// Instantiate with the join entity of the kind to operate on:
///
/// ```rust,ignore
/// let favorites = FavoriteRepository::<entity::prelude::FavoriteCharacter>::new(&db);
/// ```
pub struct FavoriteRepository<'a, K: FavoriteKind>
where
    K::Model: IntoActiveModel<<K as FavoriteKind>::ActiveModel>,
    <K::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    <<K::Catalog as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    db: &'a DatabaseConnection,
    kind: PhantomData<K>,
}

impl<'a, K: FavoriteKind> FavoriteRepository<'a, K>
where
    K::Model: IntoActiveModel<<K as FavoriteKind>::ActiveModel>,
    <K::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    <<K::Catalog as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    /// Creates a new FavoriteRepository instance for kind `K`.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            kind: PhantomData,
        }
    }

    /// Creates a new favorite linking a user to a catalog item.
    ///
    /// Both foreign keys are resolved before the insert so a dangling
    /// reference fails with a structured error naming the missing record; the
    /// schema's foreign-key constraints remain the backstop. Duplicate
    /// (user, item) pairs are allowed: each call produces a new
    /// join row with its own id.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing user_id and item_id
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite with its assigned id
    /// - `Err(AppError::DataErr(NotFound))` - The user or the catalog item
    ///   does not exist
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateFavoriteParam) -> Result<Favorite, AppError> {
        let user = entity::prelude::User::find_by_id(param.user_id)
            .one(self.db)
            .await?;
        if user.is_none() {
            return Err(DataError::NotFound {
                entity: "user",
                id: param.user_id,
            }
            .into());
        }

        let item = <K::Catalog>::find_by_id(param.item_id).one(self.db).await?;
        if item.is_none() {
            return Err(DataError::NotFound {
                entity: K::CATALOG_NAME,
                id: param.item_id,
            }
            .into());
        }

        let model = K::active_model(param.user_id, param.item_id)
            .insert(self.db)
            .await?;

        Ok(K::to_favorite(model))
    }

    /// Deletes a favorite by its own id.
    ///
    /// # Arguments
    /// - `favorite_id` - Id of the join record to delete
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(AppError::DataErr(NotFound))` - No favorite of this kind has
    ///   this id
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, favorite_id: i32) -> Result<(), AppError> {
        let result = K::delete_by_id(favorite_id).exec(self.db).await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound {
                entity: "favorite",
                id: favorite_id,
            }
            .into());
        }

        Ok(())
    }

    /// Gets all favorites of this kind belonging to one user.
    ///
    /// Does not verify the user exists; callers needing a NotFound for unknown
    /// users resolve the user first.
    ///
    /// # Arguments
    /// - `user_id` - Id of the favoriting user
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites of this kind
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let models = K::find()
            .filter(K::user_id_column().eq(user_id))
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(K::to_favorite).collect())
    }
}

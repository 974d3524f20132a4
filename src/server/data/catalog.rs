//! Catalog data repository for database operations.
//!
//! The three catalog kinds (characters, planets, starships) share one generic
//! `CatalogRepository` parameterized by a `CatalogKind` implementation instead
//! of three near-identical repositories. Each kind contributes its entity
//! mapping; the query and invariant logic is written once.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, QueryOrder,
};

use crate::server::{
    data::map_unique_violation,
    error::{data::DataError, AppError},
    model::catalog::{
        Character, CreateCharacterParam, CreatePlanetParam, CreateStarshipParam, Planet, Starship,
    },
};

/// One catalog kind, implemented by each catalog entity.
///
/// Supplies the entity-specific pieces the generic repository cannot derive:
/// the create-parameter mapping, the entity-to-domain conversion, and the name
/// used in error messages.
pub trait CatalogKind: EntityTrait
where
    Self::Model: IntoActiveModel<<Self as CatalogKind>::ActiveModel>,
    <Self::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    /// Active model used for inserts.
    type ActiveModel: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send;
    /// Parameters accepted by `create`.
    type CreateParam: Send;
    /// Domain model returned by queries.
    type Item;

    /// Kind name used in error messages, e.g. "character".
    const NAME: &'static str;

    /// Builds the active model for an insert.
    fn active_model(param: Self::CreateParam) -> <Self as CatalogKind>::ActiveModel;

    /// Converts an entity model to the kind's domain model.
    fn to_item(model: Self::Model) -> Self::Item;

    /// Column holding the primary key, used for stable ordering.
    fn id_column() -> Self::Column;
}

impl CatalogKind for entity::character::Entity {
    type ActiveModel = entity::character::ActiveModel;
    type CreateParam = CreateCharacterParam;
    type Item = Character;

    const NAME: &'static str = "character";

    fn active_model(param: Self::CreateParam) -> <Self as CatalogKind>::ActiveModel {
        entity::character::ActiveModel {
            name: sea_orm::ActiveValue::Set(param.name),
            height: sea_orm::ActiveValue::Set(param.height),
            weight: sea_orm::ActiveValue::Set(param.weight),
            ..Default::default()
        }
    }

    fn to_item(model: Self::Model) -> Self::Item {
        Character::from_entity(model)
    }

    fn id_column() -> Self::Column {
        entity::character::Column::Id
    }
}

impl CatalogKind for entity::planet::Entity {
    type ActiveModel = entity::planet::ActiveModel;
    type CreateParam = CreatePlanetParam;
    type Item = Planet;

    const NAME: &'static str = "planet";

    fn active_model(param: Self::CreateParam) -> <Self as CatalogKind>::ActiveModel {
        entity::planet::ActiveModel {
            name: sea_orm::ActiveValue::Set(param.name),
            diameter: sea_orm::ActiveValue::Set(param.diameter),
            population: sea_orm::ActiveValue::Set(param.population),
            ..Default::default()
        }
    }

    fn to_item(model: Self::Model) -> Self::Item {
        Planet::from_entity(model)
    }

    fn id_column() -> Self::Column {
        entity::planet::Column::Id
    }
}

impl CatalogKind for entity::starship::Entity {
    type ActiveModel = entity::starship::ActiveModel;
    type CreateParam = CreateStarshipParam;
    type Item = Starship;

    const NAME: &'static str = "starship";

    fn active_model(param: Self::CreateParam) -> <Self as CatalogKind>::ActiveModel {
        entity::starship::ActiveModel {
            name: sea_orm::ActiveValue::Set(param.name),
            ..Default::default()
        }
    }

    fn to_item(model: Self::Model) -> Self::Item {
        Starship::from_entity(model)
    }

    fn id_column() -> Self::Column {
        entity::starship::Column::Id
    }
}

/// Repository providing database operations for one catalog kind.
///
/// This struct holds a reference to the database connection and provides
/// methods for creating, reading, and deleting catalog records. Instantiate
/// with the entity of the kind to operate on:
///
/// ```rust,ignore
/// let characters = CatalogRepository::<entity::prelude::Character>::new(&db);
/// ```
pub struct CatalogRepository<'a, K: CatalogKind>
where
    K::Model: IntoActiveModel<<K as CatalogKind>::ActiveModel>,
    <K::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    db: &'a DatabaseConnection,
    kind: PhantomData<K>,
}

impl<'a, K: CatalogKind> CatalogRepository<'a, K>
where
    K::Model: IntoActiveModel<<K as CatalogKind>::ActiveModel>,
    <K::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    /// Creates a new CatalogRepository instance for kind `K`.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CatalogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            kind: PhantomData,
        }
    }

    /// Creates a new catalog item.
    ///
    /// # Arguments
    /// - `param` - Create parameters for this kind
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item with its assigned id
    /// - `Err(AppError::DataErr(UniqueViolation))` - An item of this kind
    ///   already holds this name
    /// - `Err(AppError)` - Other database error during insert
    pub async fn create(&self, param: K::CreateParam) -> Result<K::Item, AppError> {
        match K::active_model(param).insert(self.db).await {
            Ok(model) => Ok(K::to_item(model)),
            Err(err) => Err(map_unique_violation(err, K::NAME, "name")),
        }
    }

    /// Gets all items of this kind, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Item>)` - All records of this kind
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<K::Item>, AppError> {
        let models = K::find()
            .order_by_asc(K::id_column())
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(K::to_item).collect())
    }

    /// Gets a single item by id.
    ///
    /// # Arguments
    /// - `id` - Id of the item to fetch
    ///
    /// # Returns
    /// - `Ok(Item)` - The catalog record
    /// - `Err(AppError::DataErr(NotFound))` - No item of this kind has this id
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<K::Item, AppError> {
        let model = K::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DataError::NotFound {
                entity: K::NAME,
                id,
            })?;

        Ok(K::to_item(model))
    }

    /// Deletes an item by id.
    ///
    /// Favorite-join rows pointing at the item are removed with it via the
    /// schema's cascading foreign keys.
    ///
    /// # Arguments
    /// - `id` - Id of the item to delete
    ///
    /// # Returns
    /// - `Ok(())` - Item and its favorites deleted
    /// - `Err(AppError::DataErr(NotFound))` - No item of this kind has this id
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = K::delete_by_id(id).exec(self.db).await?;

        if result.rows_affected == 0 {
            return Err(DataError::NotFound {
                entity: K::NAME,
                id,
            }
            .into());
        }

        Ok(())
    }
}

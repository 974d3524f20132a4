//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each domain in the application. Repositories hold a reference to the
//! database connection (passed in per request, never a global), use SeaORM
//! entity models internally, and return domain models to keep the data layer
//! separate from the API surface. All invariant enforcement lives here: foreign
//! keys are resolved before writes, and the store's uniqueness constraints are
//! surfaced as structured errors.

pub mod catalog;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::{data::DataError, AppError};

/// Maps a failed insert to `UniqueViolation` when the store's uniqueness
/// constraint rejected it, passing every other database error through.
///
/// The database constraint is the source of truth for uniqueness: two
/// concurrent creates racing on the same value both reach the insert, and the
/// loser ends up here.
///
/// # Arguments
/// - `err` - The database error returned by the insert
/// - `entity` - Kind of record being written, e.g. "user"
/// - `field` - Field carrying the uniqueness constraint, e.g. "email"
pub(crate) fn map_unique_violation(
    err: DbErr,
    entity: &'static str,
    field: &'static str,
) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DataError::UniqueViolation { entity, field }.into()
        }
        _ => err.into(),
    }
}

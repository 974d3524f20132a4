use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Repository-level failures.
///
/// Every variant carries enough context for the boundary layer to name the
/// offending field or id in its response. All three are terminal: the caller
/// must correct its input before retrying; the repository never retries
/// internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A required field was absent from a create request.
    ///
    /// Results in 400 Bad Request naming the field.
    #[error("{field} is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A referenced id does not resolve to an existing record.
    ///
    /// Results in 404 Not Found naming the entity and id.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Kind of record that was looked up, e.g. "user" or "favorite".
        entity: &'static str,
        /// The id that failed to resolve.
        id: i32,
    },

    /// The store's uniqueness constraint rejected a write.
    ///
    /// Results in 409 Conflict naming the entity and field. The database
    /// constraint, not application logic, is the source of truth: concurrent
    /// creates racing on the same value resolve here for the loser.
    #[error("{entity} with this {field} already exists")]
    UniqueViolation {
        /// Kind of record being written.
        entity: &'static str,
        /// Field whose uniqueness constraint was violated.
        field: &'static str,
    },
}

/// Maps each repository error to its client-error status class.
///
/// # Returns
/// - 400 Bad Request - For `MissingField`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `UniqueViolation`
impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingField { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UniqueViolation { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

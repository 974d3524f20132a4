//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors and
//! implements `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod data;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, data::DataError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to HTTP responses. Domain-specific errors like
/// `DataError` handle their own response mapping, while infrastructure errors
/// fall through to a generic 500 with details logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Repository-level failure with a structured field or id context.
    ///
    /// Delegates to `DataError::into_response()` for status code mapping
    /// (400 Bad Request, 404 Not Found, 409 Conflict).
    #[error(transparent)]
    DataErr(#[from] DataError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged
    /// server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    ///
    /// Only reachable during startup; never converted to a response.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Repository errors carry their own status mapping; everything else is a 500
/// whose details are logged and replaced by a generic message to avoid leaking
/// implementation detail.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::DataErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server
/// error" message to the client. Used as a fallback for errors that don't have
/// specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

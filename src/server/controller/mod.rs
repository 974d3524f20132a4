//! HTTP request handlers.
//!
//! Controllers are thin glue: they convert DTOs to operation parameters,
//! invoke the repository layer, and convert the result back to DTOs. Status
//! codes come from `AppError`'s response mapping; no handler builds an error
//! response by hand.

pub mod catalog;
pub mod favorite;
pub mod user;

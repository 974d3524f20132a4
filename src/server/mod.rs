//! Server-side API backend for the favorites catalog.
//!
//! This module contains the complete backend implementation: API endpoints,
//! data access, and infrastructure services. The backend uses Axum as the web
//! framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Data Layer** (`data/`) - Database operations, invariant enforcement, and
//!   entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database connection pool)
//! - **Startup** (`startup`) - Database connection and migration on boot
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the matching controller
//! 2. **Controller** converts the DTO to validated parameters and calls the repository
//! 3. **Data** enforces invariants, queries the database, and converts entities
//!    to domain models
//! 4. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
pub mod state;

//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Factories automatically handle
//! foreign-key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let character = factory::character::create_character(&db).await?;
//!
//!     // Create a user with one favorited character
//!     let (user, character, favorite) =
//!         factory::helpers::create_user_with_favorite_character(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("leia@rebellion.example")
//!     .is_active(false)
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod starship;
pub mod user;

pub use character::create_character;
pub use favorite::{create_favorite_character, create_favorite_planet, create_favorite_starship};
pub use planet::create_planet;
pub use starship::create_starship;
pub use user::create_user;

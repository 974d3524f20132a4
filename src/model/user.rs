use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Transport representation of a user.
///
/// Credentials are stored hashed and never serialized; no password field
/// exists on this representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

/// Request body for creating a user.
///
/// Fields are optional so presence validation can name the missing field
/// instead of failing opaquely at deserialization.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Defaults to true when omitted.
    pub is_active: Option<bool>,
}

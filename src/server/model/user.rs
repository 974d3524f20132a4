use crate::{
    model::user::{CreateUserDto, UserDto},
    server::error::data::DataError,
};

/// Application user.
///
/// The stored password hash never leaves the data layer; this model carries
/// only the fields that may be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository
    /// boundary, dropping the password hash and storage-only timestamps.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_active: entity.is_active,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            is_active: self.is_active,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Email address, unique across the store.
    pub email: String,
    /// Plaintext password; hashed by the repository before storage.
    pub password: String,
    /// Whether the account starts active.
    pub is_active: bool,
}

/// Presence validation for user creation. Missing required fields fail with
/// `DataError::MissingField` naming the field.
impl TryFrom<CreateUserDto> for CreateUserParam {
    type Error = DataError;

    fn try_from(dto: CreateUserDto) -> Result<Self, Self::Error> {
        let email = dto.email.ok_or(DataError::MissingField { field: "email" })?;
        let password = dto.password.ok_or(DataError::MissingField {
            field: "password",
        })?;

        Ok(Self {
            email,
            password,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

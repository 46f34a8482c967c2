//! Domain models and parameter types for user operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user account, created on first login or by admin action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i32,
    /// Email address, unique across all users.
    pub email: String,
    /// Profile image URL from the identity provider.
    pub image_url: String,
    /// Whether the user may manage other users and apps.
    pub is_admin: bool,
    /// Display name.
    pub name: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            image_url: entity.image_url,
            is_admin: entity.is_admin,
            name: entity.name,
        }
    }

    /// Converts the domain model into its wire representation.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            image_url: self.image_url,
            is_admin: self.is_admin,
            name: self.name,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub image_url: String,
    pub is_admin: bool,
    pub name: String,
}

/// Parameters for updating an existing user.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub is_admin: Option<bool>,
    pub name: Option<String>,
}

/// Wire representation of a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub image_url: String,
    pub is_admin: bool,
    pub name: String,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub email: String,
    pub image_url: String,
    #[serde(default)]
    pub is_admin: bool,
    pub name: String,
}

impl CreateUserDto {
    pub fn into_params(self) -> CreateUserParams {
        CreateUserParams {
            email: self.email,
            image_url: self.image_url,
            is_admin: self.is_admin,
            name: self.name,
        }
    }
}

/// Request body for the login endpoint.
///
/// Carries the identity-provider profile of the user logging in; the service
/// resolves it to a stored record, creating one on first login.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserDto {
    pub email: String,
    #[serde(default)]
    pub image_url: String,
    pub name: String,
}

/// Request body for updating a user. Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub is_admin: Option<bool>,
    pub name: Option<String>,
}

impl UpdateUserDto {
    pub fn into_params(self) -> UpdateUserParams {
        UpdateUserParams {
            email: self.email,
            image_url: self.image_url,
            is_admin: self.is_admin,
            name: self.name,
        }
    }
}

//! Domain models and parameter types for app operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A client app that announcements can target by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Unique identifier for the app.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Unique short string identifier, the stable reference used by
    /// announcements instead of the internal id.
    pub slug: String,
}

impl App {
    /// Converts an entity model to an app domain model at the repository boundary.
    pub fn from_entity(entity: entity::app::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }

    /// Converts the domain model into its wire representation.
    pub fn into_dto(self) -> AppDto {
        AppDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
        }
    }
}

/// Parameters for creating a new app.
#[derive(Debug, Clone)]
pub struct CreateAppParams {
    pub name: String,
    pub slug: String,
}

/// Parameters for updating an existing app.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default)]
pub struct UpdateAppParams {
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Wire representation of an app.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// Request body for creating an app.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppDto {
    pub name: String,
    pub slug: String,
}

impl CreateAppDto {
    pub fn into_params(self) -> CreateAppParams {
        CreateAppParams {
            name: self.name,
            slug: self.slug,
        }
    }
}

/// Request body for updating an app. Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppDto {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl UpdateAppDto {
    pub fn into_params(self) -> UpdateAppParams {
        UpdateAppParams {
            name: self.name,
            slug: self.slug,
        }
    }
}

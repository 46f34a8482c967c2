//! Domain models and parameter types for announcement operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{User, UserDto};

/// A time-windowed announcement targeting one or more apps by slug.
///
/// The `[start_date, end_date]` interval defines when the announcement is
/// active; `is_debug` partitions announcements into two disjoint visibility
/// universes (internal/testing vs. production).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Unique identifier for the announcement.
    pub id: i32,
    /// Slugs of the apps this announcement targets.
    pub apps: Vec<String>,
    /// Body text shown to users.
    pub body: String,
    /// Authoring user, when the weak creator reference resolves.
    pub creator: Option<User>,
    /// End of the visibility window.
    pub end_date: DateTime<Utc>,
    /// Image shown alongside the announcement.
    pub image_url: String,
    /// Whether the announcement belongs to the debug universe.
    pub is_debug: bool,
    /// Link opened when the announcement is tapped.
    pub link: String,
    /// Start of the visibility window. Always strictly before `end_date`.
    pub start_date: DateTime<Utc>,
    /// Title shown to users.
    pub title: String,
}

impl Announcement {
    /// Assembles a domain model from its entity row, slug rows, and resolved
    /// creator at the repository boundary.
    pub fn from_entity(
        entity: entity::announcement::Model,
        apps: Vec<String>,
        creator: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            apps,
            body: entity.body,
            creator: creator.map(User::from_entity),
            end_date: entity.end_date,
            image_url: entity.image_url,
            is_debug: entity.is_debug,
            link: entity.link,
            start_date: entity.start_date,
            title: entity.title,
        }
    }

    /// Converts the domain model into its wire representation.
    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            apps: self.apps,
            body: self.body,
            creator: self.creator.map(User::into_dto),
            end_date: self.end_date,
            image_url: self.image_url,
            is_debug: self.is_debug,
            link: self.link,
            start_date: self.start_date,
            title: self.title,
        }
    }
}

/// Parameters for creating a new announcement.
///
/// Both dates are required at creation; the service rejects the pair unless
/// `start_date` is strictly before `end_date`.
#[derive(Debug, Clone)]
pub struct CreateAnnouncementParams {
    pub apps: Vec<String>,
    pub body: String,
    /// Email of the authoring user, resolved to a stored user by the service.
    pub creator_email: Option<String>,
    pub end_date: DateTime<Utc>,
    pub image_url: String,
    pub is_debug: bool,
    pub link: String,
    pub start_date: DateTime<Utc>,
    pub title: String,
}

/// Parameters for updating an existing announcement.
///
/// All fields are optional - only provided fields will be updated. When one
/// date is supplied without the other, the service validates it against the
/// stored value of the missing one.
#[derive(Debug, Clone, Default)]
pub struct UpdateAnnouncementParams {
    pub apps: Option<Vec<String>>,
    pub body: Option<String>,
    pub end_date: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub is_debug: Option<bool>,
    pub link: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub title: Option<String>,
}

/// Wire representation of an announcement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementDto {
    pub id: i32,
    pub apps: Vec<String>,
    pub body: String,
    pub creator: Option<UserDto>,
    pub end_date: DateTime<Utc>,
    pub image_url: String,
    pub is_debug: bool,
    pub link: String,
    pub start_date: DateTime<Utc>,
    pub title: String,
}

/// Request body for creating an announcement.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncementDto {
    pub apps: Vec<String>,
    pub body: String,
    pub end_date: DateTime<Utc>,
    pub image_url: String,
    #[serde(default)]
    pub is_debug: bool,
    pub link: String,
    pub start_date: DateTime<Utc>,
    pub title: String,
}

impl CreateAnnouncementDto {
    /// Builds creation parameters, attaching the authenticated user's email
    /// as the creator reference.
    pub fn into_params(self, creator_email: Option<String>) -> CreateAnnouncementParams {
        CreateAnnouncementParams {
            apps: self.apps,
            body: self.body,
            creator_email,
            end_date: self.end_date,
            image_url: self.image_url,
            is_debug: self.is_debug,
            link: self.link,
            start_date: self.start_date,
            title: self.title,
        }
    }
}

/// Request body for updating an announcement. Absent fields are left untouched.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnouncementDto {
    pub apps: Option<Vec<String>>,
    pub body: Option<String>,
    pub end_date: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
    pub is_debug: Option<bool>,
    pub link: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub title: Option<String>,
}

impl UpdateAnnouncementDto {
    pub fn into_params(self) -> UpdateAnnouncementParams {
        UpdateAnnouncementParams {
            apps: self.apps,
            body: self.body,
            end_date: self.end_date,
            image_url: self.image_url,
            is_debug: self.is_debug,
            link: self.link,
            start_date: self.start_date,
            title: self.title,
        }
    }
}

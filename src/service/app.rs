//! App service for business logic.
//!
//! This module provides the `AppService` for managing the registry of client
//! apps. Slug uniqueness is enforced by the database unique index and surfaced
//! as `Conflict`; there is no service-side pre-check, so concurrent creates
//! cannot race past validation.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::{
    data::{announcement::AnnouncementRepository, app::AppRepository},
    error::AppError,
    model::{
        announcement::Announcement,
        app::{App, CreateAppParams, UpdateAppParams},
    },
};

/// Service providing business logic for app management.
pub struct AppService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AppService<'a> {
    /// Creates a new AppService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all registered apps.
    ///
    /// # Returns
    /// - `Ok(Vec<App>)` - All stored apps
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list(&self) -> Result<Vec<App>, AppError> {
        let app_repo = AppRepository::new(self.db);
        Ok(app_repo.list().await?)
    }

    /// Registers a new app.
    ///
    /// # Arguments
    /// - `params` - App creation data
    ///
    /// # Returns
    /// - `Ok(App)` - The created app
    /// - `Err(AppError::Conflict)` - An app with that slug already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateAppParams) -> Result<App, AppError> {
        let app_repo = AppRepository::new(self.db);
        app_repo
            .create(params)
            .await
            .map_err(|err| AppError::from_unique_violation(err, "An app with that slug already exists"))
    }

    /// Applies a partial update to an app.
    ///
    /// Absent fields keep their stored values.
    ///
    /// # Arguments
    /// - `id` - Id of the app to update
    /// - `params` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(App)` - The updated app
    /// - `Err(AppError::NotFound)` - No app with that id
    /// - `Err(AppError::Conflict)` - Another app already has the new slug
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateAppParams) -> Result<App, AppError> {
        let app_repo = AppRepository::new(self.db);
        app_repo
            .update(id, params)
            .await
            .map_err(|err| AppError::from_unique_violation(err, "An app with that slug already exists"))?
            .ok_or_else(|| AppError::NotFound(format!("No app with id {}", id)))
    }

    /// Deletes an app and returns the removed record.
    ///
    /// Existing announcements keep their slug rows; stale slugs simply stop
    /// matching any registered app.
    ///
    /// # Arguments
    /// - `id` - Id of the app to delete
    ///
    /// # Returns
    /// - `Ok(App)` - The deleted app
    /// - `Err(AppError::NotFound)` - No app with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<App, AppError> {
        let app_repo = AppRepository::new(self.db);
        app_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No app with id {}", id)))
    }

    /// Retrieves the announcements currently active for an app slug.
    ///
    /// Active means the current instant falls within the closed
    /// `[start_date, end_date]` interval and the debug flag matches. An
    /// unknown slug yields an empty list rather than an error, since the
    /// endpoint is polled by clients.
    ///
    /// # Arguments
    /// - `slug` - App slug to query
    /// - `is_debug` - Which visibility universe to search
    ///
    /// # Returns
    /// - `Ok(Vec<Announcement>)` - Currently active announcements
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn active_announcements(
        &self,
        slug: &str,
        is_debug: bool,
    ) -> Result<Vec<Announcement>, AppError> {
        let announcement_repo = AnnouncementRepository::new(self.db);
        Ok(announcement_repo
            .find_active(slug, Utc::now(), is_debug)
            .await?)
    }

    /// Checks that every requested slug belongs to a registered app.
    ///
    /// Loads all existing slugs once and tests membership for each requested
    /// slug. Empty input vacuously succeeds.
    ///
    /// # Arguments
    /// - `slugs` - Slugs to validate
    ///
    /// # Returns
    /// - `Ok(())` - Every slug is registered
    /// - `Err(AppError::InvalidArgument)` - Names the first missing slug
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn validate_slugs(&self, slugs: &[String]) -> Result<(), AppError> {
        if slugs.is_empty() {
            return Ok(());
        }

        let app_repo = AppRepository::new(self.db);
        let known: HashSet<String> = app_repo.all_slugs().await?.into_iter().collect();

        for slug in slugs {
            if !known.contains(slug) {
                return Err(AppError::InvalidArgument(format!(
                    "No app with slug {}",
                    slug
                )));
            }
        }

        Ok(())
    }
}

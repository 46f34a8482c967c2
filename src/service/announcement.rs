//! Announcement service for business logic.
//!
//! This module provides the `AnnouncementService` for managing time-windowed
//! announcements. It enforces the date-ordering invariant at create and
//! update, validates targeted app slugs, and resolves the optional creator
//! reference by email before anything is written.

use sea_orm::DatabaseConnection;

use crate::{
    data::{announcement::AnnouncementRepository, user::UserRepository},
    error::AppError,
    model::announcement::{Announcement, CreateAnnouncementParams, UpdateAnnouncementParams},
    service::app::AppService,
    util::date::is_date_before,
};

/// Service providing business logic for announcement management.
pub struct AnnouncementService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    /// Creates a new AnnouncementService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all announcements in one visibility universe.
    ///
    /// # Arguments
    /// - `is_debug` - Which universe to list
    ///
    /// # Returns
    /// - `Ok(Vec<Announcement>)` - Matching announcements
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list(&self, is_debug: bool) -> Result<Vec<Announcement>, AppError> {
        let announcement_repo = AnnouncementRepository::new(self.db);
        Ok(announcement_repo.list(is_debug).await?)
    }

    /// Creates a new announcement.
    ///
    /// Validation runs before any write: the window must be well-ordered
    /// (`start_date` strictly before `end_date`) and every targeted slug must
    /// belong to a registered app. A supplied `creator_email` is resolved to
    /// a stored user.
    ///
    /// # Arguments
    /// - `params` - Announcement creation data
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The created announcement with creator attached
    /// - `Err(AppError::InvalidArgument)` - Ill-ordered window or unknown slug
    /// - `Err(AppError::NotFound)` - The creator email matches no user
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateAnnouncementParams) -> Result<Announcement, AppError> {
        if !is_date_before(params.start_date, params.end_date) {
            return Err(AppError::InvalidArgument(
                "startDate must be strictly before endDate".to_string(),
            ));
        }

        let app_service = AppService::new(self.db);
        app_service.validate_slugs(&params.apps).await?;

        let creator_id = match &params.creator_email {
            Some(email) => {
                let user_repo = UserRepository::new(self.db);
                let user = user_repo
                    .find_by_email(email)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("No user with email {}", email)))?;
                Some(user.id)
            }
            None => None,
        };

        let announcement_repo = AnnouncementRepository::new(self.db);
        Ok(announcement_repo.create(params, creator_id).await?)
    }

    /// Applies a partial update to an announcement.
    ///
    /// When either date is supplied, the hypothetical post-update window is
    /// materialized by overlaying the partial onto the stored record and the
    /// ordering check runs once against that pair. A violation aborts with no
    /// write, leaving the stored record untouched. Updates that touch neither
    /// date skip the check entirely. Supplied slugs are re-validated.
    ///
    /// # Arguments
    /// - `id` - Id of the announcement to update
    /// - `params` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The updated announcement
    /// - `Err(AppError::NotFound)` - No announcement with that id
    /// - `Err(AppError::InvalidArgument)` - Ill-ordered window or unknown slug
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAnnouncementParams,
    ) -> Result<Announcement, AppError> {
        let announcement_repo = AnnouncementRepository::new(self.db);

        let existing = announcement_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No announcement with id {}", id)))?;

        if params.start_date.is_some() || params.end_date.is_some() {
            let start = params.start_date.unwrap_or(existing.start_date);
            let end = params.end_date.unwrap_or(existing.end_date);
            if !is_date_before(start, end) {
                return Err(AppError::InvalidArgument(
                    "startDate must be strictly before endDate".to_string(),
                ));
            }
        }

        if let Some(apps) = &params.apps {
            let app_service = AppService::new(self.db);
            app_service.validate_slugs(apps).await?;
        }

        announcement_repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No announcement with id {}", id)))
    }

    /// Deletes an announcement and returns the removed record.
    ///
    /// # Arguments
    /// - `id` - Id of the announcement to delete
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The deleted announcement
    /// - `Err(AppError::NotFound)` - No announcement with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Announcement, AppError> {
        let announcement_repo = AnnouncementRepository::new(self.db);
        announcement_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No announcement with id {}", id)))
    }
}

//! User service for business logic.
//!
//! This module provides the `UserService` for managing user records. It wraps
//! the user repository, translating missing records into `NotFound` and
//! duplicate emails into `Conflict`.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All stored users
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        Ok(user_repo.list().await?)
    }

    /// Retrieves a user by email.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(User)` - User with that email
    /// - `Err(AppError::NotFound)` - No user has that email
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user with email {}", email)))
    }

    /// Creates a new user.
    ///
    /// # Arguments
    /// - `params` - User creation data
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - A user with that email already exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo
            .create(params)
            .await
            .map_err(|err| AppError::from_unique_violation(err, "A user with that email already exists"))
    }

    /// Applies a partial update to a user.
    ///
    /// Absent fields keep their stored values.
    ///
    /// # Arguments
    /// - `id` - Id of the user to update
    /// - `params` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - Another user already has the new email
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo
            .update(id, params)
            .await
            .map_err(|err| AppError::from_unique_violation(err, "A user with that email already exists"))?
            .ok_or_else(|| AppError::NotFound(format!("No user with id {}", id)))
    }

    /// Deletes a user and returns the removed record.
    ///
    /// # Arguments
    /// - `id` - Id of the user to delete
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        user_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user with id {}", id)))
    }

    /// Resolves a user by email, creating the record on first login and
    /// refreshing the profile fields on every login.
    ///
    /// # Arguments
    /// - `email` - Email address from the identity provider
    /// - `name` - Current display name from the identity provider
    /// - `image_url` - Current profile image from the identity provider
    ///
    /// # Returns
    /// - `Ok(User)` - The resolved user with refreshed profile
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn login(&self, email: &str, name: &str, image_url: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let existing = user_repo.find_by_email(email).await?;
        match existing {
            Some(user) => user_repo
                .update(
                    user.id,
                    UpdateUserParams {
                        name: Some(name.to_string()),
                        image_url: Some(image_url.to_string()),
                        ..Default::default()
                    },
                )
                .await?
                .ok_or_else(|| AppError::NotFound(format!("No user with email {}", email))),
            None => Ok(user_repo
                .create(CreateUserParams {
                    email: email.to_string(),
                    image_url: image_url.to_string(),
                    is_admin: false,
                    name: name.to_string(),
                })
                .await?),
        }
    }
}

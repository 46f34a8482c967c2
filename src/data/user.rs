//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, queries, and email lookups with conversion between
//! entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserParams, UpdateUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All user records
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email.
    ///
    /// # Arguments
    /// - `email` - Email address to look up (unique column)
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a new user.
    ///
    /// A duplicate email surfaces as the store's unique-index violation; the
    /// caller classifies it.
    ///
    /// # Arguments
    /// - `params` - User creation data
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique-index violations on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            image_url: ActiveValue::Set(params.image_url),
            is_admin: ActiveValue::Set(params.is_admin),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Applies a partial update to a user.
    ///
    /// Only fields present in `params` are written; absent fields keep their
    /// stored values. The id-scoped write is the authoritative existence
    /// check: a row that vanishes between fetch and write also yields `None`.
    ///
    /// # Arguments
    /// - `id` - Id of the user to update
    /// - `params` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, including unique-index violations on email
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.clone().into();
        let mut changed = false;

        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
            changed = true;
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
            changed = true;
        }
        if let Some(is_admin) = params.is_admin {
            active_model.is_admin = ActiveValue::Set(is_admin);
            changed = true;
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
            changed = true;
        }

        if !changed {
            return Ok(Some(User::from_entity(user)));
        }

        match active_model.update(self.db).await {
            Ok(updated) => Ok(Some(User::from_entity(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a user by id and returns the deleted record.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The deleted user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(User::from_entity(user)))
    }
}

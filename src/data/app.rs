//! App data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::model::app::{App, CreateAppParams, UpdateAppParams};

/// Repository providing database operations for app management.
pub struct AppRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppRepository<'a> {
    /// Creates a new AppRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all apps ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<App>)` - All app records
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self) -> Result<Vec<App>, DbErr> {
        let apps = entity::prelude::App::find()
            .order_by_asc(entity::app::Column::Id)
            .all(self.db)
            .await?;

        Ok(apps.into_iter().map(App::from_entity).collect())
    }

    /// Finds an app by id.
    ///
    /// # Returns
    /// - `Ok(Some(App))` - App found
    /// - `Ok(None)` - No app with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<App>, DbErr> {
        let entity = entity::prelude::App::find_by_id(id).one(self.db).await?;

        Ok(entity.map(App::from_entity))
    }

    /// Gets the slugs of every existing app in a single query.
    ///
    /// Used for slug-set validation, which loads the full set once and checks
    /// membership in memory.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - All existing slugs
    /// - `Err(DbErr)` - Database error during query
    pub async fn all_slugs(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::App::find()
            .select_only()
            .column(entity::app::Column::Slug)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Inserts a new app.
    ///
    /// A duplicate slug surfaces as the store's unique-index violation; the
    /// caller classifies it. No pre-check is performed here.
    ///
    /// # Arguments
    /// - `params` - App creation data
    ///
    /// # Returns
    /// - `Ok(App)` - The created app
    /// - `Err(DbErr)` - Database error, including unique-index violations on slug
    pub async fn create(&self, params: CreateAppParams) -> Result<App, DbErr> {
        let entity = entity::app::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(App::from_entity(entity))
    }

    /// Applies a partial update to an app.
    ///
    /// Only fields present in `params` are written. The id-scoped write is
    /// the authoritative existence check.
    ///
    /// # Arguments
    /// - `id` - Id of the app to update
    /// - `params` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(App))` - The updated app
    /// - `Ok(None)` - No app with that id
    /// - `Err(DbErr)` - Database error, including unique-index violations on slug
    pub async fn update(&self, id: i32, params: UpdateAppParams) -> Result<Option<App>, DbErr> {
        let Some(app) = entity::prelude::App::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::app::ActiveModel = app.clone().into();
        let mut changed = false;

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
            changed = true;
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
            changed = true;
        }

        if !changed {
            return Ok(Some(App::from_entity(app)));
        }

        match active_model.update(self.db).await {
            Ok(updated) => Ok(Some(App::from_entity(updated))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes an app by id and returns the deleted record.
    ///
    /// # Returns
    /// - `Ok(Some(App))` - The deleted app
    /// - `Ok(None)` - No app with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<App>, DbErr> {
        let Some(app) = entity::prelude::App::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let result = entity::prelude::App::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(App::from_entity(app)))
    }
}

//! App factory for creating test app entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test apps with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::app::AppFactory;
///
/// let app = AppFactory::new(&db)
///     .name("Eatery")
///     .slug("eatery")
///     .build()
///     .await?;
/// ```
pub struct AppFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
}

impl<'a> AppFactory<'a> {
    /// Creates a new AppFactory with default values.
    ///
    /// Defaults:
    /// - name: `"App {id}"` where id is auto-incremented
    /// - slug: `"app-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("App {}", id),
            slug: format!("app-{}", id),
        }
    }

    /// Sets the display name for the app.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the slug for the app.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Builds and inserts the app entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::app::Model)` - Created app entity
    /// - `Err(DbErr)` - Database error during insert (including slug collisions)
    pub async fn build(self) -> Result<entity::app::Model, DbErr> {
        entity::app::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an app with default values.
///
/// Shorthand for `AppFactory::new(db).build().await`.
pub async fn create_app(db: &DatabaseConnection) -> Result<entity::app::Model, DbErr> {
    AppFactory::new(db).build().await
}

/// Creates an app with a specific slug.
///
/// Shorthand for `AppFactory::new(db).slug(slug).build().await`.
pub async fn create_app_with_slug(
    db: &DatabaseConnection,
    slug: impl Into<String>,
) -> Result<entity::app::Model, DbErr> {
    AppFactory::new(db).slug(slug).build().await
}

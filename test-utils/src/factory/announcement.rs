//! Announcement factory for creating test announcement entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test announcements with customizable fields.
///
/// Inserts the announcement row plus one `announcement_app` row per slug in
/// `apps`. Defaults to a currently-active window (yesterday through tomorrow).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::announcement::AnnouncementFactory;
///
/// let announcement = AnnouncementFactory::new(&db)
///     .apps(vec!["eatery".to_string()])
///     .start_date(Utc::now() - Duration::days(2))
///     .end_date(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    apps: Vec<String>,
    body: String,
    creator_id: Option<i32>,
    end_date: DateTime<Utc>,
    image_url: String,
    is_debug: bool,
    link: String,
    start_date: DateTime<Utc>,
    title: String,
}

impl<'a> AnnouncementFactory<'a> {
    /// Creates a new AnnouncementFactory with default values.
    ///
    /// Defaults:
    /// - apps: empty
    /// - body: `"Body {id}"` where id is auto-incremented
    /// - creator_id: `None`
    /// - start_date: yesterday, end_date: tomorrow (active right now)
    /// - is_debug: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            apps: Vec::new(),
            body: format!("Body {}", id),
            creator_id: None,
            end_date: now + Duration::days(1),
            image_url: format!("https://example.edu/announcement{}.png", id),
            is_debug: false,
            link: format!("https://example.edu/announcement{}", id),
            start_date: now - Duration::days(1),
            title: format!("Announcement {}", id),
        }
    }

    /// Sets the app slugs the announcement targets.
    pub fn apps(mut self, apps: Vec<String>) -> Self {
        self.apps = apps;
        self
    }

    /// Sets the body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the creator user id.
    pub fn creator_id(mut self, creator_id: i32) -> Self {
        self.creator_id = Some(creator_id);
        self
    }

    /// Sets the end of the visibility window.
    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the debug flag.
    pub fn is_debug(mut self, is_debug: bool) -> Self {
        self.is_debug = is_debug;
        self
    }

    /// Sets the link.
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Sets the start of the visibility window.
    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the announcement and its slug rows into the database.
    ///
    /// # Returns
    /// - `Ok(entity::announcement::Model)` - Created announcement entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        let announcement = entity::announcement::ActiveModel {
            body: ActiveValue::Set(self.body),
            creator_id: ActiveValue::Set(self.creator_id),
            end_date: ActiveValue::Set(self.end_date),
            image_url: ActiveValue::Set(self.image_url),
            is_debug: ActiveValue::Set(self.is_debug),
            link: ActiveValue::Set(self.link),
            start_date: ActiveValue::Set(self.start_date),
            title: ActiveValue::Set(self.title),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for slug in self.apps {
            entity::announcement_app::ActiveModel {
                announcement_id: ActiveValue::Set(announcement.id),
                slug: ActiveValue::Set(slug),
            }
            .insert(self.db)
            .await?;
        }

        Ok(announcement)
    }
}

/// Creates an announcement with default values (active now, no apps).
///
/// Shorthand for `AnnouncementFactory::new(db).build().await`.
pub async fn create_announcement(
    db: &DatabaseConnection,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db).build().await
}

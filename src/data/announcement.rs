//! Announcement data repository for database operations.
//!
//! Announcements are stored as a main row plus one `announcement_app` row per
//! targeted slug. The repository reassembles the slug rows and the optional
//! creator into the domain model at its boundary, so callers never see the
//! split storage layout.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::model::announcement::{
    Announcement, CreateAnnouncementParams, UpdateAnnouncementParams,
};

/// Repository providing database operations for announcement management.
pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    /// Creates a new AnnouncementRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all announcements in one visibility universe.
    ///
    /// The debug and production universes are disjoint; callers always pick
    /// one explicitly.
    ///
    /// # Arguments
    /// - `is_debug` - Which universe to list
    ///
    /// # Returns
    /// - `Ok(Vec<Announcement>)` - Matching announcements with slugs and creators attached
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, is_debug: bool) -> Result<Vec<Announcement>, DbErr> {
        let rows = entity::prelude::Announcement::find()
            .filter(entity::announcement::Column::IsDebug.eq(is_debug))
            .order_by_asc(entity::announcement::Column::Id)
            .all(self.db)
            .await?;

        self.assemble(rows).await
    }

    /// Finds an announcement by id.
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - Announcement found with slugs and creator attached
    /// - `Ok(None)` - No announcement with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let Some(row) = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut assembled = self.assemble(vec![row]).await?;
        Ok(assembled.pop())
    }

    /// Gets the announcements active for an app slug at the given instant.
    ///
    /// Active means `start_date <= now <= end_date` - the closed interval,
    /// boundary-inclusive on both ends - with a matching debug flag.
    ///
    /// # Arguments
    /// - `slug` - App slug the announcement must target
    /// - `now` - The instant to test the window against
    /// - `is_debug` - Which visibility universe to search
    ///
    /// # Returns
    /// - `Ok(Vec<Announcement>)` - Active announcements for the slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active(
        &self,
        slug: &str,
        now: DateTime<Utc>,
        is_debug: bool,
    ) -> Result<Vec<Announcement>, DbErr> {
        let rows = entity::prelude::Announcement::find()
            .join(
                JoinType::InnerJoin,
                entity::announcement::Relation::AnnouncementApp.def(),
            )
            .filter(entity::announcement_app::Column::Slug.eq(slug))
            .filter(entity::announcement::Column::StartDate.lte(now))
            .filter(entity::announcement::Column::EndDate.gte(now))
            .filter(entity::announcement::Column::IsDebug.eq(is_debug))
            .order_by_asc(entity::announcement::Column::StartDate)
            .all(self.db)
            .await?;

        self.assemble(rows).await
    }

    /// Inserts a new announcement and its slug rows.
    ///
    /// Date validation happens in the service layer before this is called;
    /// the repository persists whatever it is given.
    ///
    /// # Arguments
    /// - `params` - Announcement creation data (`creator_email` is ignored here;
    ///   the service resolves it to `creator_id` first)
    /// - `creator_id` - Resolved id of the authoring user, if any
    ///
    /// # Returns
    /// - `Ok(Announcement)` - The created announcement with creator attached
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateAnnouncementParams,
        creator_id: Option<i32>,
    ) -> Result<Announcement, DbErr> {
        let entity = entity::announcement::ActiveModel {
            body: ActiveValue::Set(params.body),
            creator_id: ActiveValue::Set(creator_id),
            end_date: ActiveValue::Set(params.end_date),
            image_url: ActiveValue::Set(params.image_url),
            is_debug: ActiveValue::Set(params.is_debug),
            link: ActiveValue::Set(params.link),
            start_date: ActiveValue::Set(params.start_date),
            title: ActiveValue::Set(params.title),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for slug in &params.apps {
            entity::announcement_app::ActiveModel {
                announcement_id: ActiveValue::Set(entity.id),
                slug: ActiveValue::Set(slug.clone()),
            }
            .insert(self.db)
            .await?;
        }

        let creator = match creator_id {
            Some(id) => entity::prelude::User::find_by_id(id).one(self.db).await?,
            None => None,
        };

        let mut apps = params.apps;
        apps.sort();

        Ok(Announcement::from_entity(entity, apps, creator))
    }

    /// Applies a partial update to an announcement.
    ///
    /// Only fields present in `params` are written; absent fields keep their
    /// stored values. A supplied `apps` set replaces all existing slug rows.
    /// The id-scoped write is the authoritative existence check: a row that
    /// vanishes between fetch and write also yields `None`.
    ///
    /// # Arguments
    /// - `id` - Id of the announcement to update
    /// - `params` - Fields to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - The updated announcement
    /// - `Ok(None)` - No announcement with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateAnnouncementParams,
    ) -> Result<Option<Announcement>, DbErr> {
        let Some(row) = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::announcement::ActiveModel = row.into();
        let mut changed = false;

        if let Some(body) = params.body {
            active_model.body = ActiveValue::Set(body);
            changed = true;
        }
        if let Some(end_date) = params.end_date {
            active_model.end_date = ActiveValue::Set(end_date);
            changed = true;
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(image_url);
            changed = true;
        }
        if let Some(is_debug) = params.is_debug {
            active_model.is_debug = ActiveValue::Set(is_debug);
            changed = true;
        }
        if let Some(link) = params.link {
            active_model.link = ActiveValue::Set(link);
            changed = true;
        }
        if let Some(start_date) = params.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
            changed = true;
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
            changed = true;
        }

        if changed {
            match active_model.update(self.db).await {
                Ok(_) => {}
                Err(DbErr::RecordNotUpdated) => return Ok(None),
                Err(err) => return Err(err),
            }
        }

        // Replace slug rows if a new set was provided
        if let Some(apps) = params.apps {
            entity::prelude::AnnouncementApp::delete_many()
                .filter(entity::announcement_app::Column::AnnouncementId.eq(id))
                .exec(self.db)
                .await?;

            for slug in apps {
                entity::announcement_app::ActiveModel {
                    announcement_id: ActiveValue::Set(id),
                    slug: ActiveValue::Set(slug),
                }
                .insert(self.db)
                .await?;
            }
        }

        self.find_by_id(id).await
    }

    /// Deletes an announcement by id and returns the deleted record.
    ///
    /// Slug rows are removed first so the returned model still carries the
    /// apps the announcement targeted.
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - The deleted announcement
    /// - `Ok(None)` - No announcement with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let Some(announcement) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::AnnouncementApp::delete_many()
            .filter(entity::announcement_app::Column::AnnouncementId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(announcement))
    }

    /// Attaches slug rows and creators to a batch of announcement rows.
    ///
    /// Loads all slug rows and all referenced users in one query each, then
    /// zips them back onto the rows. Slugs are sorted for deterministic output.
    async fn assemble(
        &self,
        rows: Vec<entity::announcement::Model>,
    ) -> Result<Vec<Announcement>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
        let slug_rows = entity::prelude::AnnouncementApp::find()
            .filter(entity::announcement_app::Column::AnnouncementId.is_in(ids))
            .all(self.db)
            .await?;

        let mut slugs_by_id: HashMap<i32, Vec<String>> = HashMap::new();
        for slug_row in slug_rows {
            slugs_by_id
                .entry(slug_row.announcement_id)
                .or_default()
                .push(slug_row.slug);
        }

        let creator_ids: Vec<i32> = rows.iter().filter_map(|row| row.creator_id).collect();
        let creators: HashMap<i32, entity::user::Model> = if creator_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(creator_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut apps = slugs_by_id.remove(&row.id).unwrap_or_default();
                apps.sort();
                let creator = row.creator_id.and_then(|id| creators.get(&id).cloned());
                Announcement::from_entity(row, apps, creator)
            })
            .collect())
    }
}

use super::*;

/// Tests applying a partial update to an announcement.
///
/// Verifies that only the supplied fields change and the stored dates and
/// slug rows survive untouched.
///
/// Expected: Ok(Some) with body updated, dates and apps unchanged
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string()])
        .body("Original body")
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateAnnouncementParams {
                body: Some("Updated body".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_some());
    let announcement = updated.unwrap();
    assert_eq!(announcement.body, "Updated body");
    assert_eq!(announcement.title, created.title);
    assert_eq!(announcement.start_date, created.start_date);
    assert_eq!(announcement.end_date, created.end_date);
    assert_eq!(announcement.apps, vec!["eatery".to_string()]);

    Ok(())
}

/// Tests that a supplied apps set replaces all existing slug rows.
///
/// Expected: Ok(Some) with old slug rows gone and new ones in place
#[tokio::test]
async fn replaces_slug_rows_when_apps_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string(), "transit".to_string()])
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateAnnouncementParams {
                apps: Some(vec!["uplift".to_string()]),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().apps, vec!["uplift".to_string()]);

    let slug_rows = entity::prelude::AnnouncementApp::find()
        .filter(entity::announcement_app::Column::AnnouncementId.eq(created.id))
        .all(db)
        .await?;
    assert_eq!(slug_rows.len(), 1);
    assert_eq!(slug_rows[0].slug, "uplift");

    Ok(())
}

/// Tests an update with no fields supplied.
///
/// Expected: Ok(Some) with the record unchanged
#[tokio::test]
async fn empty_update_returns_unchanged_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_announcement(db).await?;

    let repo = AnnouncementRepository::new(db);
    let updated = repo
        .update(created.id, UpdateAnnouncementParams::default())
        .await?;

    assert!(updated.is_some());
    let announcement = updated.unwrap();
    assert_eq!(announcement.body, created.body);
    assert_eq!(announcement.title, created.title);

    Ok(())
}

/// Tests updating an announcement that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);
    let updated = repo
        .update(
            9999,
            UpdateAnnouncementParams {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

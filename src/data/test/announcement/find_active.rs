use super::*;

/// Tests that an announcement inside its window is returned for its slug.
///
/// Expected: Ok with the active announcement
#[tokio::test]
async fn returns_announcement_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string()])
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let active = repo.find_active("eatery", Utc::now(), false).await?;

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, created.id);

    Ok(())
}

/// Tests that the window is inclusive on both boundaries.
///
/// An announcement whose window starts or ends exactly at the queried
/// instant still counts as active.
///
/// Expected: Ok with the announcement at both boundaries
#[tokio::test]
async fn window_boundaries_are_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = Utc::now();
    let end = start + Duration::days(1);
    AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string()])
        .start_date(start)
        .end_date(end)
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);

    let at_start = repo.find_active("eatery", start, false).await?;
    assert_eq!(at_start.len(), 1);

    let at_end = repo.find_active("eatery", end, false).await?;
    assert_eq!(at_end.len(), 1);

    Ok(())
}

/// Tests that expired and future announcements are excluded.
///
/// Expected: Ok with no announcements returned
#[tokio::test]
async fn excludes_announcements_outside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    // Expired yesterday
    AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string()])
        .start_date(now - Duration::days(3))
        .end_date(now - Duration::days(1))
        .build()
        .await?;
    // Starts tomorrow
    AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string()])
        .start_date(now + Duration::days(1))
        .end_date(now + Duration::days(3))
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let active = repo.find_active("eatery", now, false).await?;

    assert!(active.is_empty());

    Ok(())
}

/// Tests that slug membership is required.
///
/// An active announcement targeting other apps must not appear for a slug it
/// does not list.
///
/// Expected: Ok with no announcements for the unrelated slug
#[tokio::test]
async fn excludes_announcements_for_other_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AnnouncementFactory::new(db)
        .apps(vec!["transit".to_string()])
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let active = repo.find_active("eatery", Utc::now(), false).await?;

    assert!(active.is_empty());

    Ok(())
}

/// Tests that the debug flag partitions active lookups.
///
/// A debug announcement never shows up in a production query and vice versa,
/// even when both are inside their windows for the same slug.
///
/// Expected: Ok with each universe seeing only its own announcement
#[tokio::test]
async fn partitions_active_by_debug_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let production = AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string()])
        .is_debug(false)
        .build()
        .await?;
    let debug = AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string()])
        .is_debug(true)
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);

    let production_active = repo.find_active("eatery", Utc::now(), false).await?;
    assert_eq!(production_active.len(), 1);
    assert_eq!(production_active[0].id, production.id);

    let debug_active = repo.find_active("eatery", Utc::now(), true).await?;
    assert_eq!(debug_active.len(), 1);
    assert_eq!(debug_active[0].id, debug.id);

    Ok(())
}

use super::*;

/// Tests that listing partitions announcements by the debug flag.
///
/// Production and debug announcements live in disjoint universes; a listing
/// of one must never include the other.
///
/// Expected: Ok with only the requested universe returned
#[tokio::test]
async fn partitions_by_debug_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let production = AnnouncementFactory::new(db).is_debug(false).build().await?;
    let debug = AnnouncementFactory::new(db).is_debug(true).build().await?;

    let repo = AnnouncementRepository::new(db);

    let production_list = repo.list(false).await?;
    assert_eq!(production_list.len(), 1);
    assert_eq!(production_list[0].id, production.id);

    let debug_list = repo.list(true).await?;
    assert_eq!(debug_list.len(), 1);
    assert_eq!(debug_list[0].id, debug.id);

    Ok(())
}

/// Tests that listing attaches slug rows to each announcement.
///
/// Expected: Ok with apps populated per record
#[tokio::test]
async fn attaches_apps_to_each_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AnnouncementFactory::new(db)
        .apps(vec!["eatery".to_string()])
        .build()
        .await?;
    AnnouncementFactory::new(db)
        .apps(vec!["transit".to_string(), "uplift".to_string()])
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let announcements = repo.list(false).await?;

    assert_eq!(announcements.len(), 2);
    assert_eq!(announcements[0].apps, vec!["eatery".to_string()]);
    assert_eq!(
        announcements[1].apps,
        vec!["transit".to_string(), "uplift".to_string()]
    );

    Ok(())
}

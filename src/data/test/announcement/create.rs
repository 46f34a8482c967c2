use super::*;

/// Tests creating an announcement targeting two apps.
///
/// Verifies that the repository inserts the announcement row plus one slug
/// row per targeted app, and returns the assembled record.
///
/// Expected: Ok with announcement and slug rows created
#[tokio::test]
async fn creates_announcement_with_apps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let repo = AnnouncementRepository::new(db);
    let result = repo
        .create(
            CreateAnnouncementParams {
                apps: vec!["eatery".to_string(), "transit".to_string()],
                body: "Dining halls close early tonight".to_string(),
                creator_email: None,
                end_date: now + Duration::days(7),
                image_url: "https://example.edu/dining.png".to_string(),
                is_debug: false,
                link: "https://example.edu/dining".to_string(),
                start_date: now,
                title: "Early Close".to_string(),
            },
            None,
        )
        .await;

    assert!(result.is_ok());
    let announcement = result.unwrap();
    assert_eq!(announcement.title, "Early Close");
    assert_eq!(
        announcement.apps,
        vec!["eatery".to_string(), "transit".to_string()]
    );
    assert!(announcement.creator.is_none());

    // Verify slug rows exist in database
    let slug_rows = entity::prelude::AnnouncementApp::find()
        .filter(entity::announcement_app::Column::AnnouncementId.eq(announcement.id))
        .all(db)
        .await?;
    assert_eq!(slug_rows.len(), 2);

    Ok(())
}

/// Tests creating an announcement with a resolved creator id.
///
/// Expected: Ok with the creator attached to the returned record
#[tokio::test]
async fn creates_announcement_with_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_email(db, "vdb23@cornell.edu").await?;

    let now = Utc::now();
    let repo = AnnouncementRepository::new(db);
    let announcement = repo
        .create(
            CreateAnnouncementParams {
                apps: vec![],
                body: "Body".to_string(),
                creator_email: None,
                end_date: now + Duration::days(1),
                image_url: "https://example.edu/image.png".to_string(),
                is_debug: false,
                link: "https://example.edu".to_string(),
                start_date: now,
                title: "Title".to_string(),
            },
            Some(user.id),
        )
        .await?;

    assert!(announcement.creator.is_some());
    assert_eq!(announcement.creator.unwrap().email, "vdb23@cornell.edu");

    Ok(())
}

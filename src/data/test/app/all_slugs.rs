use super::*;

/// Tests collecting the slugs of every registered app.
///
/// Expected: Ok with every slug present
#[tokio::test]
async fn returns_all_registered_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app_with_slug(db, "eatery").await?;
    factory::create_app_with_slug(db, "transit").await?;

    let repo = AppRepository::new(db);
    let slugs = repo.all_slugs().await?;

    assert_eq!(slugs.len(), 2);
    assert!(slugs.contains(&"eatery".to_string()));
    assert!(slugs.contains(&"transit".to_string()));

    Ok(())
}

/// Tests collecting slugs when no apps are registered.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_apps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppRepository::new(db);
    let slugs = repo.all_slugs().await?;

    assert!(slugs.is_empty());

    Ok(())
}

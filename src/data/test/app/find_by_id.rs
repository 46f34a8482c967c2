use super::*;

/// Tests finding an app by id.
///
/// Expected: Ok(Some) with the matching app
#[tokio::test]
async fn finds_existing_app() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_app_with_slug(db, "eatery").await?;

    let repo = AppRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().slug, "eatery");

    Ok(())
}

/// Tests finding an app by an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_app() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppRepository::new(db);
    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}

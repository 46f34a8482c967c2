use super::*;

/// Tests deleting an app.
///
/// Expected: Ok with the deleted record returned
#[tokio::test]
async fn deletes_and_returns_app() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_app_with_slug(db, "eatery").await?;

    let service = AppService::new(db);
    let deleted = service.delete(created.id).await?;

    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.slug, "eatery");

    let remaining = service.list().await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests that deleting a missing id fails and mutates nothing.
///
/// Expected: Err(NotFound), unrelated app untouched
#[tokio::test]
async fn fails_not_found_and_leaves_others_alone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app_with_slug(db, "eatery").await?;

    let service = AppService::new(db);
    let result = service.delete(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let remaining = service.list().await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}

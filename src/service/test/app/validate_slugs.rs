use super::*;

/// Tests that an empty slug list vacuously succeeds, whatever the store holds.
///
/// Expected: Ok against an empty store
#[tokio::test]
async fn empty_list_succeeds_against_empty_store() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AppService::new(db);
    service.validate_slugs(&[]).await?;

    Ok(())
}

/// Tests that every registered slug passes validation.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_registered_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app_with_slug(db, "eatery").await?;
    factory::create_app_with_slug(db, "transit").await?;

    let service = AppService::new(db);
    service
        .validate_slugs(&["eatery".to_string(), "transit".to_string()])
        .await?;

    Ok(())
}

/// Tests that an unregistered slug fails validation, naming the slug.
///
/// Expected: Err(InvalidArgument) naming "ghost"
#[tokio::test]
async fn rejects_unknown_slug_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app_with_slug(db, "eatery").await?;

    let service = AppService::new(db);
    let result = service
        .validate_slugs(&["eatery".to_string(), "ghost".to_string()])
        .await;

    match result {
        Err(AppError::InvalidArgument(msg)) => assert!(msg.contains("ghost")),
        other => panic!("Expected InvalidArgument, got: {:?}", other),
    }

    Ok(())
}

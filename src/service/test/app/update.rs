use super::*;

/// Tests a partial update leaving the absent field untouched.
///
/// Expected: Ok with the name changed and the slug intact
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_app_with_slug(db, "eatery").await?;

    let service = AppService::new(db);
    let updated = service
        .update(
            created.id,
            UpdateAppParams {
                name: Some("Eatery v2".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Eatery v2");
    assert_eq!(updated.slug, "eatery");

    Ok(())
}

/// Tests that changing a slug to one held by another app conflicts.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_slug_collision_as_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app_with_slug(db, "eatery").await?;
    let other = factory::create_app_with_slug(db, "transit").await?;

    let service = AppService::new(db);
    let result = service
        .update(
            other.id,
            UpdateAppParams {
                slug: Some("eatery".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating an app that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_not_found_for_missing_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AppService::new(db);
    let result = service
        .update(
            9999,
            UpdateAppParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;

/// Tests applying a partial update to an app.
///
/// Verifies that only the supplied fields change.
///
/// Expected: Ok(Some) with name updated and slug untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_app_with_slug(db, "eatery").await?;

    let repo = AppRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateAppParams {
                name: Some("Eatery v2".to_string()),
                slug: None,
            },
        )
        .await?;

    assert!(updated.is_some());
    let app = updated.unwrap();
    assert_eq!(app.name, "Eatery v2");
    assert_eq!(app.slug, "eatery");

    Ok(())
}

/// Tests renaming an app's slug to one that is already taken.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_update_to_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app_with_slug(db, "eatery").await?;
    let other = factory::create_app_with_slug(db, "transit").await?;

    let repo = AppRepository::new(db);
    let result = repo
        .update(
            other.id,
            UpdateAppParams {
                name: None,
                slug: Some("eatery".to_string()),
            },
        )
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests updating an app that does not exist.
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
    let updated = repo
        .update(
            9999,
            UpdateAppParams {
                name: Some("Ghost".to_string()),
                slug: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

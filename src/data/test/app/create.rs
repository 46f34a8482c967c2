use super::*;

/// Tests creating a new app.
///
/// Expected: Ok with app created
#[tokio::test]
async fn creates_app() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppRepository::new(db);
    let result = repo
        .create(CreateAppParams {
            name: "Eatery".to_string(),
            slug: "eatery".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let app = result.unwrap();
    assert_eq!(app.name, "Eatery");
    assert_eq!(app.slug, "eatery");

    // Verify app exists in database
    let db_app = entity::prelude::App::find_by_id(app.id).one(db).await?;
    assert!(db_app.is_some());
    assert_eq!(db_app.unwrap().slug, "eatery");

    Ok(())
}

/// Tests creating an app with a slug that is already taken.
///
/// The slug column is unique, so the second insert must surface a database
/// error the service layer can classify as a conflict.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_app_with_slug(db, "eatery").await?;

    let repo = AppRepository::new(db);
    let result = repo
        .create(CreateAppParams {
            name: "Eatery Clone".to_string(),
            slug: "eatery".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

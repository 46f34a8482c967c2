use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository inserts the user with the given fields and
/// returns the stored record.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: "vdb23@cornell.edu".to_string(),
            image_url: "https://example.edu/vin.png".to_string(),
            is_admin: false,
            name: "Vin".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.email, "vdb23@cornell.edu");
    assert_eq!(user.name, "Vin");
    assert!(!user.is_admin);

    // Verify user exists in database
    let db_user = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(db_user.is_some());
    assert_eq!(db_user.unwrap().email, "vdb23@cornell.edu");

    Ok(())
}

/// Tests creating a user with an email that is already taken.
///
/// The email column is unique, so the second insert must surface a database
/// error the service layer can classify as a conflict.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_email(db, "taken@cornell.edu").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: "taken@cornell.edu".to_string(),
            image_url: "https://example.edu/other.png".to_string(),
            is_admin: false,
            name: "Other".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the given fields stored
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .create(CreateUserParams {
            email: "vdb23@cornell.edu".to_string(),
            image_url: "https://example.edu/vdb23.png".to_string(),
            is_admin: true,
            name: "Vin".to_string(),
        })
        .await?;

    assert_eq!(user.email, "vdb23@cornell.edu");
    assert!(user.is_admin);

    Ok(())
}

/// Tests that a duplicate email surfaces as a conflict.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_email_as_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_email(db, "vdb23@cornell.edu").await?;

    let service = UserService::new(db);
    let result = service
        .create(CreateUserParams {
            email: "vdb23@cornell.edu".to_string(),
            image_url: String::new(),
            is_admin: false,
            name: "Someone Else".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

use super::*;

/// Tests that a first login creates the user record.
///
/// Expected: Ok with a non-admin record holding the provided profile
#[tokio::test]
async fn first_login_creates_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .login(
            "vdb23@cornell.edu",
            "Vin",
            "https://example.edu/vdb23.png",
        )
        .await?;

    assert_eq!(user.email, "vdb23@cornell.edu");
    assert_eq!(user.name, "Vin");
    assert!(!user.is_admin);

    Ok(())
}

/// Tests that a returning login refreshes the profile but keeps the record.
///
/// Expected: Ok with the same id, updated name and image, admin flag intact
#[tokio::test]
async fn returning_login_refreshes_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::user::UserFactory::new(db)
        .email("vdb23@cornell.edu")
        .name("Old Name")
        .is_admin(true)
        .build()
        .await?;

    let service = UserService::new(db);
    let user = service
        .login(
            "vdb23@cornell.edu",
            "New Name",
            "https://example.edu/new.png",
        )
        .await?;

    assert_eq!(user.id, created.id);
    assert_eq!(user.name, "New Name");
    assert_eq!(user.image_url, "https://example.edu/new.png");
    assert!(user.is_admin);

    Ok(())
}

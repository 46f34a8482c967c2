use super::*;

/// Tests finding a user by id.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    let user = found.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.email, created.email);

    Ok(())
}

/// Tests finding a user by an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}

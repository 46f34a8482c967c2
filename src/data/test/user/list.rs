use super::*;

/// Tests listing all users ordered by id.
///
/// Expected: Ok with every stored user in insertion order
#[tokio::test]
async fn lists_all_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.list().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert_eq!(users[1].id, second.id);

    Ok(())
}

/// Tests listing users when none exist.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn lists_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.list().await?;

    assert!(users.is_empty());

    Ok(())
}

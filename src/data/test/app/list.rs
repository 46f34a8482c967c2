use super::*;

/// Tests listing all apps ordered by id.
///
/// Expected: Ok with every stored app in insertion order
#[tokio::test]
async fn lists_all_apps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_app(db).await?;
    let second = factory::create_app(db).await?;

    let repo = AppRepository::new(db);
    let apps = repo.list().await?;

    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].id, first.id);
    assert_eq!(apps[1].id, second.id);

    Ok(())
}

/// Tests listing apps when none exist.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn lists_empty_when_no_apps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppRepository::new(db);
    let apps = repo.list().await?;

    assert!(apps.is_empty());

    Ok(())
}

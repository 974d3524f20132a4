use super::*;

/// Tests listing users on an empty store.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await.unwrap();

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing all users.
///
/// Verifies that every stored user is returned, ordered by id.
///
/// Expected: Ok with all users in id order
#[tokio::test]
async fn returns_all_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await.unwrap();

    assert_eq!(users.len(), 3);
    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![first.id, second.id, third.id]
    );

    Ok(())
}

use super::*;

/// Tests fetching an existing user by id.
///
/// Expected: Ok with matching fields, password hash excluded
#[tokio::test]
async fn returns_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user(db).await?;

    let user = UserRepository::new(db).get_by_id(stored.id).await.unwrap();

    assert_eq!(user.id, stored.id);
    assert_eq!(user.email, stored.email);
    assert_eq!(user.is_active, stored.is_active);

    Ok(())
}

/// Tests fetching a user id that does not exist.
///
/// Verifies that the error names the entity and id, and the store is
/// untouched.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = UserRepository::new(db).get_by_id(999).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::NotFound {
            entity: "user",
            id: 999,
        })
    ));

    Ok(())
}

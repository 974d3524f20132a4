use super::*;

/// Tests creating a user with valid parameters.
///
/// Verifies that the repository assigns a fresh id and that fetching the
/// returned id yields an equal record.
///
/// Expected: Ok with round-trippable user
#[tokio::test]
async fn creates_user_and_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(param("a@b.com")).await.unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.email, "a@b.com");
    assert!(created.is_active);

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    Ok(())
}

/// Tests that the stored password is an argon2 digest.
///
/// Verifies that the plaintext never reaches the database.
///
/// Expected: password_hash column holds an argon2 digest
#[tokio::test]
async fn hashes_password_at_rest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(param("a@b.com")).await.unwrap();

    let row = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();

    assert_ne!(row.password_hash, "opensesame");
    assert!(row.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests that the is_active flag is persisted as provided.
///
/// Expected: Ok with inactive user stored
#[tokio::test]
async fn stores_inactive_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParam {
            email: "a@b.com".to_string(),
            password: "opensesame".to_string(),
            is_active: false,
        })
        .await
        .unwrap();

    assert!(!created.is_active);
    assert!(!repo.get_by_id(created.id).await.unwrap().is_active);

    Ok(())
}

/// Tests creating a second user with an email already in use.
///
/// Verifies that the store's unique constraint rejects the write with a
/// structured violation naming the field, and that no record is persisted.
///
/// Expected: Err(UniqueViolation) with store size unchanged
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("a@b.com")).await.unwrap();

    let err = repo.create(param("a@b.com")).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::UniqueViolation {
            entity: "user",
            field: "email",
        })
    ));

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

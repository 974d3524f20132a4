use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    UserRepository::new(db).delete(user.id).await.unwrap();

    let row = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(row.is_none());

    Ok(())
}

/// Tests deleting a user id that does not exist.
///
/// Expected: Err(NotFound) with store unchanged
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let err = UserRepository::new(db).delete(999).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::NotFound {
            entity: "user",
            id: 999,
        })
    ));

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting the same user twice.
///
/// Expected: first Ok, second Err(NotFound)
#[tokio::test]
async fn second_delete_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.delete(user.id).await.unwrap();
    let err = repo.delete(user.id).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::NotFound { entity: "user", .. })
    ));

    Ok(())
}

/// Tests that deleting a user removes their favorites of every kind.
///
/// Verifies the cascading foreign keys: the join rows disappear with the
/// user while the catalog items themselves survive.
///
/// Expected: Ok with favorites gone and catalog intact
#[tokio::test]
async fn cascades_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_favorite_character(db, user.id, character.id).await?;
    factory::create_favorite_planet(db, user.id, planet.id).await?;

    UserRepository::new(db).delete(user.id).await.unwrap();

    let character_favorites = entity::prelude::FavoriteCharacter::find().count(db).await?;
    let planet_favorites = entity::prelude::FavoritePlanet::find().count(db).await?;
    assert_eq!(character_favorites, 0);
    assert_eq!(planet_favorites, 0);

    // The catalog items themselves are untouched.
    assert!(entity::prelude::Character::find_by_id(character.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Planet::find_by_id(planet.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

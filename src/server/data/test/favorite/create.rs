use super::*;

/// Tests creating a favorite for an existing user and character.
///
/// Verifies that the join row is persisted with a fresh id and both
/// foreign keys.
///
/// Expected: Ok with matching user and item ids
#[tokio::test]
async fn creates_character_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let favorite = FavoriteRepository::<FavoriteCharacter>::new(db)
        .create(param(user.id, character.id))
        .await
        .unwrap();

    assert!(favorite.id >= 1);
    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.item_id, character.id);

    let row = FavoriteCharacter::find_by_id(favorite.id).one(db).await?;
    assert!(row.is_some());

    Ok(())
}

/// Tests that each favorite gets its own identity.
///
/// Expected: Ok twice with distinct ids
#[tokio::test]
async fn assigns_fresh_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first_character = factory::create_character(db).await?;
    let second_character = factory::create_character(db).await?;

    let repo = FavoriteRepository::<FavoriteCharacter>::new(db);
    let first = repo.create(param(user.id, first_character.id)).await.unwrap();
    let second = repo
        .create(param(user.id, second_character.id))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests favoriting the same item twice.
///
/// There is no uniqueness on the (user, item) pair: both calls succeed and
/// produce separate join rows.
///
/// Expected: Ok twice with two rows stored
#[tokio::test]
async fn allows_duplicate_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let repo = FavoriteRepository::<FavoriteCharacter>::new(db);
    let first = repo.create(param(user.id, character.id)).await.unwrap();
    let second = repo.create(param(user.id, character.id)).await.unwrap();

    assert_ne!(first.id, second.id);

    let count = FavoriteCharacter::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests creating a favorite for a user id that does not exist.
///
/// Expected: Err(NotFound("user")) with no row persisted
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let err = FavoriteRepository::<FavoriteCharacter>::new(db)
        .create(param(999, character.id))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::NotFound {
            entity: "user",
            id: 999,
        })
    ));

    let count = FavoriteCharacter::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests creating a favorite for a character id that does not exist.
///
/// Expected: Err(NotFound("character")) with no row persisted
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let err = FavoriteRepository::<FavoriteCharacter>::new(db)
        .create(param(user.id, 999))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::NotFound {
            entity: "character",
            id: 999,
        })
    ));

    let count = FavoriteCharacter::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that the missing-item error names the kind actually targeted.
///
/// Expected: Err(NotFound("planet")) and Err(NotFound("starship"))
#[tokio::test]
async fn names_the_targeted_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let planet_err = FavoriteRepository::<FavoritePlanet>::new(db)
        .create(param(user.id, 999))
        .await
        .unwrap_err();
    assert!(matches!(
        planet_err,
        AppError::DataErr(DataError::NotFound {
            entity: "planet",
            ..
        })
    ));

    let starship_err = FavoriteRepository::<FavoriteStarship>::new(db)
        .create(param(user.id, 999))
        .await
        .unwrap_err();
    assert!(matches!(
        starship_err,
        AppError::DataErr(DataError::NotFound {
            entity: "starship",
            ..
        })
    ));

    Ok(())
}

/// Tests creating favorites of the other two kinds.
///
/// Expected: Ok with join rows pointing at the right catalog items
#[tokio::test]
async fn creates_planet_and_starship_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let starship = factory::create_starship(db).await?;

    let planet_favorite = FavoriteRepository::<FavoritePlanet>::new(db)
        .create(param(user.id, planet.id))
        .await
        .unwrap();
    assert_eq!(planet_favorite.item_id, planet.id);

    let starship_favorite = FavoriteRepository::<FavoriteStarship>::new(db)
        .create(param(user.id, starship.id))
        .await
        .unwrap();
    assert_eq!(starship_favorite.item_id, starship.id);

    Ok(())
}

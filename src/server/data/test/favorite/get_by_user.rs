use super::*;

/// Tests listing favorites for a user with none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let favorites = FavoriteRepository::<FavoriteCharacter>::new(db)
        .get_by_user(user.id)
        .await
        .unwrap();

    assert!(favorites.is_empty());

    Ok(())
}

/// Tests that listing returns only the requesting user's favorites.
///
/// Expected: Ok with the other user's rows excluded
#[tokio::test]
async fn returns_only_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_user = factory::create_user(db).await?;
    let second_user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let first_favorite =
        factory::create_favorite_character(db, first_user.id, character.id).await?;
    factory::create_favorite_character(db, second_user.id, character.id).await?;

    let favorites = FavoriteRepository::<FavoriteCharacter>::new(db)
        .get_by_user(first_user.id)
        .await
        .unwrap();

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, first_favorite.id);
    assert_eq!(favorites[0].user_id, first_user.id);

    Ok(())
}

/// Tests that listing one kind does not include the user's favorites of
/// another kind.
///
/// Expected: Ok with only character favorites returned
#[tokio::test]
async fn returns_only_requested_kind() -> Result<(), DbErr> {
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

    let favorites = FavoriteRepository::<FavoriteCharacter>::new(db)
        .get_by_user(user.id)
        .await
        .unwrap();

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].item_id, character.id);

    Ok(())
}

use super::*;

/// Tests deleting an existing character.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    CatalogRepository::<Character>::new(db)
        .delete(character.id)
        .await
        .unwrap();

    let row = Character::find_by_id(character.id).one(db).await?;
    assert!(row.is_none());

    Ok(())
}

/// Tests deleting a character id that does not exist.
///
/// Expected: Err(NotFound) with store unchanged
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character(db).await?;

    let err = CatalogRepository::<Character>::new(db)
        .delete(999)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::NotFound {
            entity: "character",
            id: 999,
        })
    ));

    let count = Character::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that deleting a catalog item removes the favorites pointing at it.
///
/// Verifies the cascading foreign keys: join rows disappear with the item
/// while the favoriting user survives.
///
/// Expected: Ok with favorites gone and user intact
#[tokio::test]
async fn cascades_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, _favorite) =
        factory::helpers::create_user_with_favorite_character(db).await?;

    CatalogRepository::<Character>::new(db)
        .delete(character.id)
        .await
        .unwrap();

    let favorites = entity::prelude::FavoriteCharacter::find().count(db).await?;
    assert_eq!(favorites, 0);

    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

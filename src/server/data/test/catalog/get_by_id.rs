use super::*;

/// Tests fetching an existing character by id.
///
/// Expected: Ok with matching fields
#[tokio::test]
async fn returns_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_character(db).await?;

    let character = CatalogRepository::<Character>::new(db)
        .get_by_id(stored.id)
        .await
        .unwrap();

    assert_eq!(character.id, stored.id);
    assert_eq!(character.name, stored.name);
    assert_eq!(character.height, stored.height);
    assert_eq!(character.weight, stored.weight);

    Ok(())
}

/// Tests fetching a character id that does not exist.
///
/// Expected: Err(NotFound) naming the kind
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let err = CatalogRepository::<Character>::new(db)
        .get_by_id(999)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::NotFound {
            entity: "character",
            id: 999,
        })
    ));

    Ok(())
}

/// Tests that the error names the kind actually queried.
///
/// Expected: Err(NotFound) naming "planet"
#[tokio::test]
async fn fails_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Planet).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let err = CatalogRepository::<Planet>::new(db)
        .get_by_id(42)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::NotFound {
            entity: "planet",
            id: 42,
        })
    ));

    Ok(())
}

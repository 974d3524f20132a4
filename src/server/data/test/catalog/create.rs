use super::*;

/// Tests creating a character with valid parameters.
///
/// Verifies that the repository assigns a fresh id and that fetching the
/// returned id yields an equal record.
///
/// Expected: Ok with round-trippable character
#[tokio::test]
async fn creates_character_and_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::<Character>::new(db);
    let created = repo.create(character_param("Luke")).await.unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.name, "Luke");
    assert_eq!(created.height, Some(172));
    assert_eq!(created.weight, Some(77));

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    Ok(())
}

/// Tests that absent optional fields are stored as NULL, not coerced.
///
/// Expected: Ok with both optional fields None
#[tokio::test]
async fn stores_absent_optional_fields_as_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::<Character>::new(db);
    let created = repo
        .create(CreateCharacterParam {
            name: "Yoda".to_string(),
            height: None,
            weight: None,
        })
        .await
        .unwrap();

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.height, None);
    assert_eq!(fetched.weight, None);

    Ok(())
}

/// Tests creating a second character with a name already in use.
///
/// Verifies that the unique constraint rejects the write with a structured
/// violation naming the field, and that no record is persisted.
///
/// Expected: Err(UniqueViolation) with store size unchanged
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::<Character>::new(db);
    repo.create(character_param("Luke")).await.unwrap();

    let err = repo.create(character_param("Luke")).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::DataErr(DataError::UniqueViolation {
            entity: "character",
            field: "name",
        })
    ));

    let count = Character::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests creating a planet through the same generic repository.
///
/// Expected: Ok with round-trippable planet
#[tokio::test]
async fn creates_planet_and_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Planet).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::<Planet>::new(db);
    let created = repo
        .create(CreatePlanetParam {
            name: "Tatooine".to_string(),
            diameter: Some(10_465),
            population: Some(200_000),
        })
        .await
        .unwrap();

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Tatooine");

    Ok(())
}

/// Tests creating a starship through the same generic repository.
///
/// Expected: Ok with round-trippable starship
#[tokio::test]
async fn creates_starship_and_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Starship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::<Starship>::new(db);
    let created = repo
        .create(CreateStarshipParam {
            name: "Millennium Falcon".to_string(),
        })
        .await
        .unwrap();

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    Ok(())
}

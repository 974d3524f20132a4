use crate::{
    model::favorite::{
        CreateFavoriteCharacterDto, CreateFavoritePlanetDto, CreateFavoriteStarshipDto,
        FavoriteCharacterDto, FavoritePlanetDto, FavoriteStarshipDto, UserFavoritesDto,
    },
    server::error::data::DataError,
};

/// A favorite-join record, uniform across catalog kinds.
///
/// The kind is carried by the type parameter of the repository that produced
/// the record, not by the record itself; `item_id` points at a character,
/// planet or starship accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub item_id: i32,
}

impl Favorite {
    /// Converts to the character-favorite DTO, restoring the per-kind
    /// foreign-key field name.
    pub fn into_character_dto(self) -> FavoriteCharacterDto {
        FavoriteCharacterDto {
            id: self.id,
            user_id: self.user_id,
            character_id: self.item_id,
        }
    }

    /// Converts to the planet-favorite DTO.
    pub fn into_planet_dto(self) -> FavoritePlanetDto {
        FavoritePlanetDto {
            id: self.id,
            user_id: self.user_id,
            planet_id: self.item_id,
        }
    }

    /// Converts to the starship-favorite DTO.
    pub fn into_starship_dto(self) -> FavoriteStarshipDto {
        FavoriteStarshipDto {
            id: self.id,
            user_id: self.user_id,
            starship_id: self.item_id,
        }
    }
}

/// Parameters for creating a favorite of any kind.
#[derive(Debug, Clone, Copy)]
pub struct CreateFavoriteParam {
    /// Id of the favoriting user.
    pub user_id: i32,
    /// Id of the favorited catalog item.
    pub item_id: i32,
}

/// Presence validation for character favorites.
impl TryFrom<CreateFavoriteCharacterDto> for CreateFavoriteParam {
    type Error = DataError;

    fn try_from(dto: CreateFavoriteCharacterDto) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: dto.user_id.ok_or(DataError::MissingField {
                field: "user_id",
            })?,
            item_id: dto.character_id.ok_or(DataError::MissingField {
                field: "character_id",
            })?,
        })
    }
}

/// Presence validation for planet favorites.
impl TryFrom<CreateFavoritePlanetDto> for CreateFavoriteParam {
    type Error = DataError;

    fn try_from(dto: CreateFavoritePlanetDto) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: dto.user_id.ok_or(DataError::MissingField {
                field: "user_id",
            })?,
            item_id: dto.planet_id.ok_or(DataError::MissingField {
                field: "planet_id",
            })?,
        })
    }
}

/// Presence validation for starship favorites.
impl TryFrom<CreateFavoriteStarshipDto> for CreateFavoriteParam {
    type Error = DataError;

    fn try_from(dto: CreateFavoriteStarshipDto) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: dto.user_id.ok_or(DataError::MissingField {
                field: "user_id",
            })?,
            item_id: dto.starship_id.ok_or(DataError::MissingField {
                field: "starship_id",
            })?,
        })
    }
}

/// All of one user's favorites, grouped by catalog kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFavorites {
    pub characters: Vec<Favorite>,
    pub planets: Vec<Favorite>,
    pub starships: Vec<Favorite>,
}

impl UserFavorites {
    /// Converts the grouped favorites to their DTO for API responses.
    pub fn into_dto(self) -> UserFavoritesDto {
        UserFavoritesDto {
            favorites_characters: self
                .characters
                .into_iter()
                .map(Favorite::into_character_dto)
                .collect(),
            favorites_planets: self
                .planets
                .into_iter()
                .map(Favorite::into_planet_dto)
                .collect(),
            favorites_starships: self
                .starships
                .into_iter()
                .map(Favorite::into_starship_dto)
                .collect(),
        }
    }
}

use serde::Serialize;
use sqlx::sqlite::SqliteRow;

use super::CatalogKind;

/// A join table between users and one kind of catalog item
///
/// Both relations share the same shape: a row id, the user id and the item
/// id, with `(user_id, item)` unique. The repository in `db::favorites` is
/// written once against this trait.
pub trait FavoriteRelation:
    for<'r> sqlx::FromRow<'r, SqliteRow> + Serialize + Send + Unpin + 'static
{
    /// Table holding the relation rows
    const TABLE: &'static str;
    /// Column holding the catalog item id
    const ITEM_COLUMN: &'static str;
    /// Catalog the item id points into
    const KIND: CatalogKind;
}

/// Row of `people_favorites`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct PersonFavorite {
    pub id: i64,
    pub user_id: i64,
    pub person_id: i64,
}

impl FavoriteRelation for PersonFavorite {
    const TABLE: &'static str = "people_favorites";
    const ITEM_COLUMN: &'static str = "person_id";
    const KIND: CatalogKind = CatalogKind::Person;
}

/// Row of `planet_favorites`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct PlanetFavorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: i64,
}

impl FavoriteRelation for PlanetFavorite {
    const TABLE: &'static str = "planet_favorites";
    const ITEM_COLUMN: &'static str = "planet_id";
    const KIND: CatalogKind = CatalogKind::Planet;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_favorite_projection() {
        let fav = PersonFavorite {
            id: 3,
            user_id: 1,
            person_id: 5,
        };

        assert_eq!(
            serde_json::to_value(&fav).unwrap(),
            json!({ "id": 3, "user_id": 1, "person_id": 5 })
        );
    }

    #[test]
    fn test_planet_favorite_projection() {
        let fav = PlanetFavorite {
            id: 7,
            user_id: 2,
            planet_id: 9,
        };

        assert_eq!(
            serde_json::to_value(&fav).unwrap(),
            json!({ "id": 7, "user_id": 2, "planet_id": 9 })
        );
    }

    #[test]
    fn test_relations_use_distinct_tables() {
        assert_ne!(PersonFavorite::TABLE, PlanetFavorite::TABLE);
        assert_eq!(PersonFavorite::KIND, CatalogKind::Person);
        assert_eq!(PlanetFavorite::KIND, CatalogKind::Planet);
    }
}

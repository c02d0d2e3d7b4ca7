use serde::Serialize;

use crate::constants::*;

/// The two kinds of catalog item a user can favorite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Person,
    Planet,
}

impl CatalogKind {
    /// Message for a catalog lookup that found nothing
    pub fn not_found_message(self) -> &'static str {
        match self {
            CatalogKind::Person => MSG_PERSON_NOT_FOUND,
            CatalogKind::Planet => MSG_PLANET_NOT_FOUND,
        }
    }

    pub fn already_favorite_message(self) -> &'static str {
        match self {
            CatalogKind::Person => MSG_PERSON_ALREADY_FAVORITE,
            CatalogKind::Planet => MSG_PLANET_ALREADY_FAVORITE,
        }
    }

    pub fn favorite_added_message(self) -> &'static str {
        match self {
            CatalogKind::Person => MSG_PERSON_FAVORITE_ADDED,
            CatalogKind::Planet => MSG_PLANET_FAVORITE_ADDED,
        }
    }

    pub fn favorite_removed_message(self) -> &'static str {
        match self {
            CatalogKind::Person => MSG_PERSON_FAVORITE_REMOVED,
            CatalogKind::Planet => MSG_PLANET_FAVORITE_REMOVED,
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Person => write!(f, "person"),
            CatalogKind::Planet => write!(f, "planet"),
        }
    }
}

/// Character record from the `people` table
///
/// Descriptive columns are free text and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

/// Planet record from the `planets` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_messages() {
        let kind = CatalogKind::Person;
        assert_eq!(kind.not_found_message(), "No se ha encontrado el personaje");
        assert_eq!(
            kind.already_favorite_message(),
            "Este personaje ya está en favoritos"
        );
        assert_eq!(kind.favorite_added_message(), "Personaje añadido a favoritos");
        assert_eq!(
            kind.favorite_removed_message(),
            "Personaje eliminado de favoritos"
        );
    }

    #[test]
    fn test_planet_messages() {
        let kind = CatalogKind::Planet;
        assert_eq!(kind.not_found_message(), "No se ha encontrado el planeta");
        assert_eq!(
            kind.already_favorite_message(),
            "Este planeta ya está en favoritos"
        );
        assert_eq!(kind.favorite_added_message(), "Planeta añadido a favoritos");
        assert_eq!(
            kind.favorite_removed_message(),
            "Planeta eliminado de favoritos"
        );
    }

    #[test]
    fn test_person_serializes_own_fields_only() {
        let person = Person {
            id: 1,
            name: "Luke Skywalker".to_string(),
            birth_year: Some("19BBY".to_string()),
            gender: Some("male".to_string()),
            height: Some("172".to_string()),
            eye_color: Some("blue".to_string()),
            hair_color: None,
        };

        let value = serde_json::to_value(&person).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert_eq!(object["name"], "Luke Skywalker");
        assert!(object["hair_color"].is_null());
    }
}

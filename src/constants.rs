// =============================================================================
// Catalog Messages
// =============================================================================

/// Returned with 404 when a person id is unknown
pub const MSG_PERSON_NOT_FOUND: &str = "No se ha encontrado el personaje";

/// Returned with 404 when a planet id is unknown
pub const MSG_PLANET_NOT_FOUND: &str = "No se ha encontrado el planeta";

// =============================================================================
// Favorite Messages
// =============================================================================

pub const MSG_PERSON_ALREADY_FAVORITE: &str = "Este personaje ya está en favoritos";
pub const MSG_PLANET_ALREADY_FAVORITE: &str = "Este planeta ya está en favoritos";

pub const MSG_PERSON_FAVORITE_ADDED: &str = "Personaje añadido a favoritos";
pub const MSG_PLANET_FAVORITE_ADDED: &str = "Planeta añadido a favoritos";

pub const MSG_PERSON_FAVORITE_REMOVED: &str = "Personaje eliminado de favoritos";
pub const MSG_PLANET_FAVORITE_REMOVED: &str = "Planeta eliminado de favoritos";

/// Shared by both relations: the pair has no favorite row
pub const MSG_FAVORITE_NOT_FOUND: &str = "Favorito no encontrado";

/// Body for unexpected persistence failures (details only go to the log)
pub const MSG_INTERNAL_ERROR: &str = "Internal server error";

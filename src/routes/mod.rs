pub mod extract;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

pub use favorites::{add_favorite, list_favorites, remove_favorite};
pub use health::health_check;
pub use people::{get_person, list_people};
pub use planets::{get_planet, list_planets};
pub use sitemap::sitemap;
pub use users::list_users;

use axum::{
    routing::{get, post},
    Router,
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::models::{PersonFavorite, PlanetFavorite};
use crate::AppState;

/// GET endpoints without path parameters, shown on the sitemap
pub const SITEMAP_LINKS: &[&str] = &["/", "/health", "/user", "/people", "/planets"];

/// Build the API router
///
/// Transport layers (CORS, tracing) are added by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health_check))
        .route("/user", get(list_users))
        .route("/people", get(list_people))
        .route("/people/:person_id", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planet/:planet_id", get(get_planet))
        .route(
            "/user/:user_id/favorite/people",
            get(list_favorites::<PersonFavorite>),
        )
        .route(
            "/user/:user_id/favorite/people/:person_id",
            post(add_favorite::<PersonFavorite>).delete(remove_favorite::<PersonFavorite>),
        )
        .route(
            "/user/:user_id/favorite/planet",
            get(list_favorites::<PlanetFavorite>),
        )
        .route(
            "/user/:user_id/favorite/planet/:planet_id",
            post(add_favorite::<PlanetFavorite>).delete(remove_favorite::<PlanetFavorite>),
        )
        .with_state(state)
}

/// Wrap a finished router so `/people/` is served like `/people`
///
/// Must sit outside the `Router`: layers added with `Router::layer` run
/// after routing, too late to rewrite the path.
pub fn trim_trailing_slash(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

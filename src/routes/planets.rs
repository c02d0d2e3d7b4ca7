use axum::{extract::State, Json};

use crate::db::catalog;
use crate::error::{AppError, Result};
use crate::models::{CatalogKind, Planet};
use crate::routes::extract::Path;
use crate::AppState;

/// GET /planets
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>> {
    let planets = catalog::list_planets(&state.db).await?;
    Ok(Json(planets))
}

/// Single planet by id
///
/// Mounted at the singular `/planet/:id`, which clients already use even
/// though the list lives at `/planets`.
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<u32>,
) -> Result<Json<Planet>> {
    let planet = catalog::get_planet(&state.db, i64::from(planet_id))
        .await?
        .ok_or(AppError::NotFound(CatalogKind::Planet))?;
    Ok(Json(planet))
}

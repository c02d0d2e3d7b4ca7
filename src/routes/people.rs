use axum::{extract::State, Json};

use crate::db::catalog;
use crate::error::{AppError, Result};
use crate::models::{CatalogKind, Person};
use crate::routes::extract::Path;
use crate::AppState;

/// GET /people
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>> {
    let people = catalog::list_people(&state.db).await?;
    Ok(Json(people))
}

/// Single character by id
///
/// GET /people/:id, 404 if the id is unknown
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<u32>,
) -> Result<Json<Person>> {
    let person = catalog::get_person(&state.db, i64::from(person_id))
        .await?
        .ok_or(AppError::NotFound(CatalogKind::Person))?;
    Ok(Json(person))
}

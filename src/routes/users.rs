use axum::{extract::State, Json};

use crate::db::catalog;
use crate::error::Result;
use crate::models::User;
use crate::AppState;

/// List every user account
///
/// GET /user
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = catalog::list_users(&state.db).await?;
    Ok(Json(users))
}

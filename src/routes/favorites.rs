use axum::{extract::State, Json};
use serde::Serialize;

use crate::db::favorites;
use crate::error::Result;
use crate::models::FavoriteRelation;
use crate::routes::extract::Path;
use crate::AppState;

/// Confirmation body for add/remove
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

/// List a user's favorites of one kind
///
/// GET /user/:user_id/favorite/people
/// GET /user/:user_id/favorite/planet
///
/// The user id is not validated; an unknown user gets an empty list.
pub async fn list_favorites<F: FavoriteRelation>(
    State(state): State<AppState>,
    Path(user_id): Path<u32>,
) -> Result<Json<Vec<F>>> {
    let rows = favorites::list_favorites::<F>(&state.db, i64::from(user_id)).await?;
    Ok(Json(rows))
}

/// POST /user/:user_id/favorite/{people,planet}/:item_id
///
/// 400 if the item is already a favorite of this user.
pub async fn add_favorite<F: FavoriteRelation>(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(u32, u32)>,
) -> Result<Json<MessageResponse>> {
    favorites::add_favorite::<F>(&state.db, i64::from(user_id), i64::from(item_id)).await?;
    Ok(Json(MessageResponse {
        msg: F::KIND.favorite_added_message(),
    }))
}

/// DELETE /user/:user_id/favorite/{people,planet}/:item_id
///
/// 400 if there is no such favorite.
pub async fn remove_favorite<F: FavoriteRelation>(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(u32, u32)>,
) -> Result<Json<MessageResponse>> {
    favorites::remove_favorite::<F>(&state.db, i64::from(user_id), i64::from(item_id)).await?;
    Ok(Json(MessageResponse {
        msg: F::KIND.favorite_removed_message(),
    }))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{MSG_FAVORITE_NOT_FOUND, MSG_INTERNAL_ERROR};
use crate::models::CatalogKind;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0} not found")]
    NotFound(CatalogKind),

    #[error("{0} already in favorites")]
    AlreadyFavorited(CatalogKind),

    #[error("{0} favorite not found")]
    FavoriteNotFound(CatalogKind),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Implement IntoResponse to convert AppError into HTTP responses
///
/// Catalog misses answer `{"error": ..}`, favorite conflicts answer
/// `{"msg": ..}`, matching what existing clients read.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, key, message) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "error", MSG_INTERNAL_ERROR)
            }
            AppError::NotFound(kind) => (StatusCode::NOT_FOUND, "error", kind.not_found_message()),
            AppError::AlreadyFavorited(kind) => (
                StatusCode::BAD_REQUEST,
                "msg",
                kind.already_favorite_message(),
            ),
            AppError::FavoriteNotFound(_) => {
                (StatusCode::BAD_REQUEST, "msg", MSG_FAVORITE_NOT_FOUND)
            }
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "error", msg.as_str()),
        };

        let body = Json(json!({ key: message }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

//! Favorites repository.
//!
//! One implementation serves both join tables through [`FavoriteRelation`].
//! Every statement runs in autocommit mode, so concurrent writers queue on
//! SQLite's busy timeout instead of failing a read-to-write lock upgrade.
//! The `UNIQUE (user_id, item)` constraint on each table turns a lost add
//! race into `AlreadyFavorited` instead of a duplicate row.
//!
//! User and item ids are not checked against the catalog.

use sqlx::{Sqlite, SqliteExecutor};

use crate::error::{AppError, Result};
use crate::models::FavoriteRelation;

use super::Db;

fn select_sql<F: FavoriteRelation>(filter: &str) -> String {
    format!(
        "SELECT id, user_id, {item} FROM {table} WHERE {filter} ORDER BY id",
        item = F::ITEM_COLUMN,
        table = F::TABLE,
    )
}

/// All favorite rows for a user; an unknown user simply has none
pub async fn list_favorites<F: FavoriteRelation>(db: &Db, user_id: i64) -> Result<Vec<F>> {
    let sql = select_sql::<F>("user_id = ?");
    let rows = sqlx::query_as::<Sqlite, F>(&sql)
        .bind(user_id)
        .fetch_all(db)
        .await?;
    Ok(rows)
}

/// Exact `(user_id, item_id)` lookup
pub async fn find_favorite<'e, F, E>(
    executor: E,
    user_id: i64,
    item_id: i64,
) -> std::result::Result<Option<F>, sqlx::Error>
where
    F: FavoriteRelation,
    E: SqliteExecutor<'e>,
{
    let sql = select_sql::<F>(&format!("user_id = ? AND {} = ?", F::ITEM_COLUMN));
    sqlx::query_as::<Sqlite, F>(&sql)
        .bind(user_id)
        .bind(item_id)
        .fetch_optional(executor)
        .await
}

/// Mark an item as favorite for a user
///
/// Fails with `AlreadyFavorited` if the pair exists; nothing is written.
/// The lookup and the insert are separate autocommit statements so writers
/// only ever wait on the busy timeout; an add that loses a race between
/// them is rejected by the unique constraint.
pub async fn add_favorite<F: FavoriteRelation>(db: &Db, user_id: i64, item_id: i64) -> Result<()> {
    if find_favorite::<F, _>(db, user_id, item_id).await?.is_some() {
        tracing::info!(
            "User {} already has {} {} in favorites",
            user_id,
            F::KIND,
            item_id
        );
        return Err(AppError::AlreadyFavorited(F::KIND));
    }

    let sql = format!(
        "INSERT INTO {} (user_id, {}) VALUES (?, ?)",
        F::TABLE,
        F::ITEM_COLUMN
    );
    sqlx::query(&sql)
        .bind(user_id)
        .bind(item_id)
        .execute(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                tracing::warn!(
                    "Concurrent add of {} {} for user {} hit the unique constraint",
                    F::KIND,
                    item_id,
                    user_id
                );
                AppError::AlreadyFavorited(F::KIND)
            }
            other => AppError::Database(other),
        })?;

    tracing::info!("User {} added {} {} to favorites", user_id, F::KIND, item_id);
    Ok(())
}

/// Remove an item from a user's favorites
///
/// Fails with `FavoriteNotFound` if the pair does not exist. Lookup and
/// delete are one statement: no affected row means no favorite.
pub async fn remove_favorite<F: FavoriteRelation>(
    db: &Db,
    user_id: i64,
    item_id: i64,
) -> Result<()> {
    let sql = format!(
        "DELETE FROM {} WHERE user_id = ? AND {} = ?",
        F::TABLE,
        F::ITEM_COLUMN
    );
    let removed = sqlx::query(&sql)
        .bind(user_id)
        .bind(item_id)
        .execute(db)
        .await?
        .rows_affected();

    if removed == 0 {
        tracing::info!(
            "User {} has no favorite {} {} to remove",
            user_id,
            F::KIND,
            item_id
        );
        return Err(AppError::FavoriteNotFound(F::KIND));
    }

    tracing::info!(
        "User {} removed {} {} from favorites",
        user_id,
        F::KIND,
        item_id
    );
    Ok(())
}

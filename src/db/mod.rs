pub mod catalog;
pub mod favorites;
pub mod pool;

pub use pool::create_pool;

use sqlx::SqlitePool;

/// Database handle type (cheaply cloneable pool shared across handlers)
pub type Db = SqlitePool;

/// Apply the embedded schema migrations
///
/// Idempotent: already-applied migrations are skipped.
pub async fn run_migrations(pool: &Db) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}

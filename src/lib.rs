//! Catalog & Favorites API
//!
//! Read-only catalog of users, people and planets, plus per-user favorite
//! people and planets. The binary in `main.rs` wires this library to a
//! SQLite pool and an HTTP listener.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::{create_pool, run_migrations, Db};
pub use error::{AppError, Result};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given database and configuration
    pub fn new(db: Db, config: Config) -> Self {
        Self { db, config }
    }
}

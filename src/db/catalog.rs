//! Read-only access to users and catalog items.
//!
//! Rows are created by seed data or admin tooling; nothing here mutates.
//! Lists are ordered by id so repeated reads come back in the same order.

use crate::models::{Person, Planet, User};

use super::Db;

pub async fn list_users(db: &Db) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, email, is_active FROM users ORDER BY id")
        .fetch_all(db)
        .await
}

pub async fn list_people(db: &Db) -> Result<Vec<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>(
        "SELECT id, name, birth_year, gender, height, eye_color, hair_color
         FROM people ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn get_person(db: &Db, id: i64) -> Result<Option<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>(
        "SELECT id, name, birth_year, gender, height, eye_color, hair_color
         FROM people WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn list_planets(db: &Db) -> Result<Vec<Planet>, sqlx::Error> {
    sqlx::query_as::<_, Planet>(
        "SELECT id, name, climate, terrain, population, diameter
         FROM planets ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn get_planet(db: &Db, id: i64) -> Result<Option<Planet>, sqlx::Error> {
    sqlx::query_as::<_, Planet>(
        "SELECT id, name, climate, terrain, population, diameter
         FROM planets WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

use serde::Serialize;

/// User account as stored in the `users` table and returned by `GET /user`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

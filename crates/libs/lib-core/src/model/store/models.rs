use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User entity as stored in the database.
///
/// Records are created by registration and read by login; this service
/// never updates or deletes them. `password_hash` stays inside the backend:
/// outward-facing code converts to `dto::UserInfo` instead of serializing
/// this type.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for a new user. Password must already be hashed.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub fullname: String,
    pub username: String,
    pub password_hash: String,
}

impl UserForCreate {
    pub fn new(fullname: String, username: String, password_hash: String) -> Self {
        Self {
            fullname,
            username,
            password_hash,
        }
    }
}

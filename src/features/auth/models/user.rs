use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// User record in the database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

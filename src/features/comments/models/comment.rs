use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a comment, joined with its author's username
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub username: String,
    pub listing_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub message: String,
    pub user_id: Uuid,
    pub listing_id: Uuid,
}

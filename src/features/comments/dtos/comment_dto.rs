use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::comments::models::Comment;

/// Request DTO for commenting on a listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    #[validate(length(min = 1, max = 5000, message = "Comment must be 1-5000 characters"))]
    pub message: String,
}

/// Response DTO for a comment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponseDto {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub author: String,
    pub listing_id: Uuid,
}

impl From<Comment> for CommentResponseDto {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            message: c.message,
            created_at: c.created_at,
            user_id: c.user_id,
            author: c.username,
            listing_id: c.listing_id,
        }
    }
}

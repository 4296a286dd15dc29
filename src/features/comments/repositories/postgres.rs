use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::CommentRepository;
use crate::core::error::{AppError, Result};
use crate::features::comments::models::{Comment, NewComment};

pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn list_for_listing(&self, listing_id: Uuid) -> Result<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT c.id, c.message, c.created_at, c.user_id, u.username, c.listing_id
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.listing_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(listing_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list comments: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment> {
        sqlx::query_as::<_, Comment>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (id, message, user_id, listing_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, message, created_at, user_id, listing_id
            )
            SELECT i.id, i.message, i.created_at, i.user_id, u.username, i.listing_id
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&comment.message)
        .bind(comment.user_id)
        .bind(comment.listing_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create comment: {:?}", e);
            AppError::Database(e)
        })
    }
}

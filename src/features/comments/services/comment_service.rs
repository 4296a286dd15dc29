use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::AuthenticatedUser;
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto};
use crate::features::comments::models::NewComment;
use crate::features::comments::repositories::CommentRepository;
use crate::features::listings::repositories::ListingRepository;

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, listings: Arc<dyn ListingRepository>) -> Self {
        Self { comments, listings }
    }

    /// Comments are accepted whether or not the auction is still running
    pub async fn add(
        &self,
        listing_id: Uuid,
        author: &AuthenticatedUser,
        dto: CreateCommentDto,
    ) -> Result<CommentResponseDto> {
        if self.listings.find(listing_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Listing {} not found",
                listing_id
            )));
        }

        let comment = self
            .comments
            .insert(NewComment {
                message: dto.message,
                user_id: author.user_id,
                listing_id,
            })
            .await?;

        tracing::info!(
            "Comment {} added to listing {} by {}",
            comment.id,
            listing_id,
            author.user_id
        );
        Ok(comment.into())
    }
}

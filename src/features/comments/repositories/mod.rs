mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::comments::models::{Comment, NewComment};

pub use postgres::PgCommentRepository;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments on a listing, newest first
    async fn list_for_listing(&self, listing_id: Uuid) -> Result<Vec<Comment>>;

    async fn insert(&self, comment: NewComment) -> Result<Comment>;
}

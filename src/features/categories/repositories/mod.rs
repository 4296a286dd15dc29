mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::Category;

pub use postgres::PgCategoryRepository;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by title
    async fn list_all(&self) -> Result<Vec<Category>>;

    async fn find(&self, id: Uuid) -> Result<Option<Category>>;

    /// Fails with `AppError::Conflict` when the title is taken.
    async fn insert(&self, title: &str) -> Result<Category>;

    /// Listings in the category are detached, not removed. Returns false when
    /// no such category exists.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

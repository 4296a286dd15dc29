mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;

pub use postgres::PgWatchlistRepository;

#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    async fn contains(&self, user_id: Uuid, listing_id: Uuid) -> Result<bool>;

    /// No-op when the listing is already watched
    async fn add(&self, user_id: Uuid, listing_id: Uuid) -> Result<()>;

    async fn remove(&self, user_id: Uuid, listing_id: Uuid) -> Result<()>;
}

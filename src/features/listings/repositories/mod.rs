mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::listings::models::{Listing, ListingFilter, NewListing};

pub use postgres::PgListingRepository;

#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Listing>>;

    async fn insert(&self, listing: NewListing) -> Result<Listing>;

    /// Persists the mutable fields of a listing. `start_time` is never rewritten.
    async fn save(&self, listing: &Listing) -> Result<Listing>;

    async fn list(&self, filter: ListingFilter) -> Result<Vec<Listing>>;

    /// Sets the closed flag on every open listing whose end time has passed.
    /// Returns the number of listings flagged.
    async fn mark_expired(&self, now: DateTime<Utc>) -> Result<u64>;
}

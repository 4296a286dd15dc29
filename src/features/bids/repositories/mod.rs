mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::bids::models::{Bid, BidWithBidder, NewBid};
use crate::features::listings::lifecycle::LifecycleError;
use crate::features::listings::models::Listing;

pub use postgres::PgBidRepository;

/// Acceptance rule evaluated against the locked listing and its current bids
pub type BidCheck = dyn Fn(&Listing, &[Bid]) -> std::result::Result<(), LifecycleError> + Send + Sync;

#[async_trait]
pub trait BidRepository: Send + Sync {
    /// Bids on a listing, highest amount first
    async fn list_for_listing(&self, listing_id: Uuid) -> Result<Vec<BidWithBidder>>;

    /// Locks the listing, runs `check` against it and its bids, then stores the
    /// bid and adds the listing to the bidder's watchlist. Nothing is written
    /// when `check` rejects the bid.
    async fn place(&self, bid: NewBid, check: &BidCheck) -> Result<Bid>;
}

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::bids::dtos::{BidResponseDto, CreateBidDto};
use crate::features::bids::models::{Bid, NewBid};
use crate::features::bids::repositories::BidRepository;
use crate::features::listings::lifecycle::{self, LifecycleError};
use crate::features::listings::models::Listing;

/// Service for placing bids
pub struct BidService {
    bids: Arc<dyn BidRepository>,
}

impl BidService {
    pub fn new(bids: Arc<dyn BidRepository>) -> Self {
        Self { bids }
    }

    /// Accepts the bid only if the auction is running and the amount beats
    /// every existing bid and the starting bid. The bidder ends up watching
    /// the listing.
    pub async fn place_bid(
        &self,
        listing_id: Uuid,
        bidder: &AuthenticatedUser,
        dto: CreateBidDto,
        now: DateTime<Utc>,
    ) -> Result<BidResponseDto> {
        let amount = dto.amount;
        let check = move |listing: &Listing, existing: &[Bid]| -> std::result::Result<(), LifecycleError> {
            lifecycle::ensure_open(listing, now)?;
            lifecycle::validate_bid(listing, amount, existing)
        };

        let bid = self
            .bids
            .place(
                NewBid {
                    amount,
                    user_id: bidder.user_id,
                    listing_id,
                },
                &check,
            )
            .await
            .map_err(|e| {
                tracing::info!(
                    "Bid of {} on listing {} by {} rejected: {}",
                    amount,
                    listing_id,
                    bidder.user_id,
                    e
                );
                e
            })?;

        tracing::info!(
            "Bid {} of {} placed on listing {} by {}",
            bid.id,
            bid.amount,
            listing_id,
            bidder.user_id
        );

        Ok(BidResponseDto {
            id: bid.id,
            amount: bid.amount,
            user_id: bid.user_id,
            bidder: bidder.username.clone(),
            listing_id: bid.listing_id,
            created_at: bid.created_at,
        })
    }
}

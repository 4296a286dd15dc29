//! Auction lifecycle rules.
//!
//! Every function here is pure: callers pass `now` explicitly and persist any
//! returned state themselves.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::bids::models::Bid;
use crate::features::listings::models::{Listing, ListingStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("New bid must be higher than current highest bid and at least the starting bid")]
    BidTooLow,

    #[error("End date must be after the current date/time.")]
    InvalidWindow,

    #[error("Only the owner of this listing can close it")]
    NotOwner,

    #[error("This auction has already ended")]
    AuctionClosed,
}

/// Days/hours/minutes left before a listing's end time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

pub fn is_finished(listing: &Listing, now: DateTime<Utc>) -> bool {
    listing.closed || now >= listing.end_time
}

pub fn status(listing: &Listing, now: DateTime<Utc>) -> ListingStatus {
    if is_finished(listing, now) {
        ListingStatus::Closed
    } else {
        ListingStatus::Open
    }
}

/// True when the end time has passed but the closed flag was never persisted.
pub fn needs_expiry(listing: &Listing, now: DateTime<Utc>) -> bool {
    !listing.closed && now >= listing.end_time
}

/// Returns the listing with `closed` set, ready to be saved.
pub fn expire(mut listing: Listing) -> Listing {
    listing.closed = true;
    listing
}

/// Owner-only manual close. A listing that already finished, whether flagged
/// or past its end time, keeps the end time it finished at.
pub fn close_listing(
    listing: &Listing,
    actor: Uuid,
    now: DateTime<Utc>,
) -> Result<Listing, LifecycleError> {
    if actor != listing.owner_id {
        return Err(LifecycleError::NotOwner);
    }

    if is_finished(listing, now) {
        return Ok(expire(listing.clone()));
    }

    let mut closed = listing.clone();
    closed.closed = true;
    closed.end_time = now;
    Ok(closed)
}

pub fn ensure_open(listing: &Listing, now: DateTime<Utc>) -> Result<(), LifecycleError> {
    if is_finished(listing, now) {
        Err(LifecycleError::AuctionClosed)
    } else {
        Ok(())
    }
}

/// A listing without bids accepts anything at or above the starting bid.
pub fn validate_bid(
    listing: &Listing,
    amount: Decimal,
    existing_bids: &[Bid],
) -> Result<(), LifecycleError> {
    let highest = existing_bids
        .iter()
        .filter(|b| b.listing_id == listing.id)
        .all(|b| amount > b.amount);

    if highest && amount >= listing.start_bid {
        Ok(())
    } else {
        Err(LifecycleError::BidTooLow)
    }
}

pub fn validate_listing_window(
    end_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), LifecycleError> {
    if end_time > now {
        Ok(())
    } else {
        Err(LifecycleError::InvalidWindow)
    }
}

pub fn time_remaining(listing: &Listing, now: DateTime<Utc>) -> Option<TimeRemaining> {
    if is_finished(listing, now) {
        return None;
    }

    let total_minutes = (listing.end_time - now).num_minutes();
    Some(TimeRemaining {
        days: total_minutes / (24 * 60),
        hours: (total_minutes % (24 * 60)) / 60,
        minutes: total_minutes % 60,
    })
}

/// Highest bid, or the starting bid while nobody has bid yet.
pub fn current_price(listing: &Listing, bids: &[Bid]) -> Decimal {
    bids.iter()
        .filter(|b| b.listing_id == listing.id)
        .map(|b| b.amount)
        .max()
        .unwrap_or(listing.start_bid)
}

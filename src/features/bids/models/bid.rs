use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a bid
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Bid {
    pub id: Uuid,
    pub amount: Decimal,
    pub user_id: Uuid,
    pub listing_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Bid with the bidder's username, as shown on a listing page
#[derive(Debug, Clone, FromRow)]
pub struct BidWithBidder {
    pub id: Uuid,
    pub amount: Decimal,
    pub user_id: Uuid,
    pub username: String,
    pub listing_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&BidWithBidder> for Bid {
    fn from(b: &BidWithBidder) -> Self {
        Self {
            id: b.id,
            amount: b.amount,
            user_id: b.user_id,
            listing_id: b.listing_id,
            created_at: b.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewBid {
    pub amount: Decimal,
    pub user_id: Uuid,
    pub listing_id: Uuid,
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::bids::models::BidWithBidder;

/// Request DTO for placing a bid
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBidDto {
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
}

/// Response DTO for a bid
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BidResponseDto {
    pub id: Uuid,
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
    pub user_id: Uuid,
    pub bidder: String,
    pub listing_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<BidWithBidder> for BidResponseDto {
    fn from(b: BidWithBidder) -> Self {
        Self {
            id: b.id,
            amount: b.amount,
            user_id: b.user_id,
            bidder: b.username,
            listing_id: b.listing_id,
            created_at: b.created_at,
        }
    }
}

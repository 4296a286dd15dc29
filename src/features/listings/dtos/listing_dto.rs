use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::bids::dtos::BidResponseDto;
use crate::features::comments::dtos::CommentResponseDto;
use crate::features::listings::lifecycle::{self, TimeRemaining};
use crate::features::listings::models::{Listing, ListingStatus};

/// Request DTO for creating a listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateListingDto {
    #[validate(length(min = 1, max = 64, message = "Item name must be 1-64 characters"))]
    pub item_name: String,

    #[validate(length(min = 1, message = "Item description is required"))]
    pub item_description: String,

    #[validate(url(message = "Image must be a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Minimum acceptable first bid
    #[schema(value_type = String, example = "10.00")]
    pub start_bid: Decimal,

    /// Must be in the future
    pub end_time: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

/// Response DTO for a listing as shown in lists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingResponseDto {
    pub id: Uuid,
    pub item_name: String,
    pub item_description: String,
    pub image_url: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[schema(value_type = String, example = "10.00")]
    pub start_bid: Decimal,
    pub status: ListingStatus,
    pub owner_id: Uuid,
    pub category_id: Option<Uuid>,
}

impl ListingResponseDto {
    /// Status is computed against `now`, not read from the stored flag alone
    pub fn from_listing(listing: Listing, now: DateTime<Utc>) -> Self {
        Self {
            status: lifecycle::status(&listing, now),
            id: listing.id,
            item_name: listing.item_name,
            item_description: listing.item_description,
            image_url: listing.image_url,
            start_time: listing.start_time,
            end_time: listing.end_time,
            start_bid: listing.start_bid,
            owner_id: listing.owner_id,
            category_id: listing.category_id,
        }
    }
}

/// Response DTO for the listing page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingDetailDto {
    pub listing: ListingResponseDto,
    /// Highest bid, or the starting bid when nobody has bid yet
    #[schema(value_type = String, example = "10.00")]
    pub current_price: Decimal,
    /// Absent once the auction has ended
    pub time_remaining: Option<TimeRemaining>,
    /// Highest first
    pub bids: Vec<BidResponseDto>,
    /// Newest first
    pub comments: Vec<CommentResponseDto>,
}

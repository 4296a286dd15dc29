use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Database model for an auction listing
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Listing {
    pub id: Uuid,
    pub item_name: String,
    pub item_description: String,
    pub image_url: Option<String>,
    /// Set once when the listing is created
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub start_bid: Decimal,
    pub closed: bool,
    pub owner_id: Uuid,
    pub category_id: Option<Uuid>,
}

/// Values required to insert a new listing
#[derive(Debug, Clone)]
pub struct NewListing {
    pub item_name: String,
    pub item_description: String,
    pub image_url: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub start_bid: Decimal,
    pub owner_id: Uuid,
    pub category_id: Option<Uuid>,
}

/// Computed auction state of a listing at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Open,
    Closed,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingStatus::Open => write!(f, "open"),
            ListingStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Selection used by `ListingRepository::list`; each variant implies its ordering
#[derive(Debug, Clone)]
pub enum ListingFilter {
    /// Open and unexpired, newest first
    Active { now: DateTime<Utc> },
    /// Open listings in the category with this title, newest first
    ActiveInCategory { title: String, now: DateTime<Utc> },
    /// Open listings the user is watching, newest first
    WatchedBy { user_id: Uuid, now: DateTime<Utc> },
    /// Closed listings, soonest ended first
    Closed,
}

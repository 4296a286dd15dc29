use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::AuthenticatedUser;
use crate::features::listings::dtos::ListingResponseDto;
use crate::features::listings::models::ListingFilter;
use crate::features::listings::repositories::ListingRepository;
use crate::features::watchlist::dtos::WatchStatusDto;
use crate::features::watchlist::repositories::WatchlistRepository;

pub struct WatchlistService {
    watchlist: Arc<dyn WatchlistRepository>,
    listings: Arc<dyn ListingRepository>,
}

impl WatchlistService {
    pub fn new(
        watchlist: Arc<dyn WatchlistRepository>,
        listings: Arc<dyn ListingRepository>,
    ) -> Self {
        Self {
            watchlist,
            listings,
        }
    }

    /// Removes the listing from the user's watchlist if present, adds it
    /// otherwise. Applying it twice restores the original state.
    pub async fn toggle(
        &self,
        user: &AuthenticatedUser,
        listing_id: Uuid,
    ) -> Result<WatchStatusDto> {
        if self.listings.find(listing_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Listing {} not found",
                listing_id
            )));
        }

        let watching = if self.watchlist.contains(user.user_id, listing_id).await? {
            self.watchlist.remove(user.user_id, listing_id).await?;
            false
        } else {
            self.watchlist.add(user.user_id, listing_id).await?;
            true
        };

        tracing::debug!(
            "User {} watching listing {}: {}",
            user.user_id,
            listing_id,
            watching
        );
        Ok(WatchStatusDto {
            listing_id,
            watching,
        })
    }

    /// Watched listings that are still open, newest first
    pub async fn list(
        &self,
        user: &AuthenticatedUser,
        now: DateTime<Utc>,
    ) -> Result<Vec<ListingResponseDto>> {
        let listings = self
            .listings
            .list(ListingFilter::WatchedBy {
                user_id: user.user_id,
                now,
            })
            .await?;

        Ok(listings
            .into_iter()
            .map(|l| ListingResponseDto::from_listing(l, now))
            .collect())
    }
}

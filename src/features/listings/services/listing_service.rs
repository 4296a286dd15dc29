use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::AuthenticatedUser;
use crate::features::bids::models::Bid;
use crate::features::bids::repositories::BidRepository;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::comments::repositories::CommentRepository;
use crate::features::listings::dtos::{CreateListingDto, ListingDetailDto, ListingResponseDto};
use crate::features::listings::lifecycle;
use crate::features::listings::models::{Listing, ListingFilter, NewListing};
use crate::features::listings::repositories::ListingRepository;

/// Service for listing creation, browsing and closing
pub struct ListingService {
    listings: Arc<dyn ListingRepository>,
    bids: Arc<dyn BidRepository>,
    comments: Arc<dyn CommentRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ListingService {
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        bids: Arc<dyn BidRepository>,
        comments: Arc<dyn CommentRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            listings,
            bids,
            comments,
            categories,
        }
    }

    pub async fn create(
        &self,
        owner: &AuthenticatedUser,
        dto: CreateListingDto,
        now: DateTime<Utc>,
    ) -> Result<ListingResponseDto> {
        lifecycle::validate_listing_window(dto.end_time, now)?;

        if dto.start_bid.is_sign_negative() {
            return Err(AppError::Validation(
                "Starting bid must not be negative".to_string(),
            ));
        }

        if let Some(category_id) = dto.category_id {
            if self.categories.find(category_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Category {} does not exist",
                    category_id
                )));
            }
        }

        let listing = self
            .listings
            .insert(NewListing {
                item_name: dto.item_name,
                item_description: dto.item_description,
                image_url: dto.image_url,
                start_time: now,
                end_time: dto.end_time,
                start_bid: dto.start_bid,
                owner_id: owner.user_id,
                category_id: dto.category_id,
            })
            .await?;

        tracing::info!("Listing {} created by {}", listing.id, owner.user_id);
        Ok(ListingResponseDto::from_listing(listing, now))
    }

    /// Listing page. Persists the closed flag when the end time has passed.
    pub async fn detail(&self, id: Uuid, now: DateTime<Utc>) -> Result<ListingDetailDto> {
        let mut listing = self.get(id).await?;

        if lifecycle::needs_expiry(&listing, now) {
            listing = self.listings.save(&lifecycle::expire(listing)).await?;
            tracing::info!("Listing {} expired", listing.id);
        }

        let bids = self.bids.list_for_listing(id).await?;
        let comments = self.comments.list_for_listing(id).await?;

        let plain_bids: Vec<Bid> = bids.iter().map(Bid::from).collect();
        let current_price = lifecycle::current_price(&listing, &plain_bids);
        let time_remaining = lifecycle::time_remaining(&listing, now);

        Ok(ListingDetailDto {
            listing: ListingResponseDto::from_listing(listing, now),
            current_price,
            time_remaining,
            bids: bids.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }

    /// Open, unexpired listings, newest first
    pub async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<ListingResponseDto>> {
        let listings = self.listings.list(ListingFilter::Active { now }).await?;
        Ok(Self::to_dtos(listings, now))
    }

    /// Finished listings, soonest ended first
    pub async fn list_closed(&self, now: DateTime<Utc>) -> Result<Vec<ListingResponseDto>> {
        let expired = self.listings.mark_expired(now).await?;
        if expired > 0 {
            tracing::info!("Flagged {} expired listings as closed", expired);
        }

        let listings = self.listings.list(ListingFilter::Closed).await?;
        Ok(Self::to_dtos(listings, now))
    }

    /// Owner-only manual close
    pub async fn close(
        &self,
        id: Uuid,
        user: &AuthenticatedUser,
        now: DateTime<Utc>,
    ) -> Result<ListingResponseDto> {
        let listing = self.get(id).await?;

        let closed = lifecycle::close_listing(&listing, user.user_id, now).map_err(|e| {
            tracing::warn!("User {} tried to close listing {}: {}", user.user_id, id, e);
            e
        })?;

        let listing = if closed != listing {
            let saved = self.listings.save(&closed).await?;
            tracing::info!("Listing {} closed by owner", id);
            saved
        } else {
            listing
        };

        Ok(ListingResponseDto::from_listing(listing, now))
    }

    async fn get(&self, id: Uuid) -> Result<Listing> {
        self.listings
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Listing {} not found", id)))
    }

    fn to_dtos(listings: Vec<Listing>, now: DateTime<Utc>) -> Vec<ListingResponseDto> {
        listings
            .into_iter()
            .map(|l| ListingResponseDto::from_listing(l, now))
            .collect()
    }
}

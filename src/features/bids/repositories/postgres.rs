use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{BidCheck, BidRepository};
use crate::core::error::{AppError, Result};
use crate::features::bids::models::{Bid, BidWithBidder, NewBid};
use crate::features::listings::models::Listing;

pub struct PgBidRepository {
    pool: PgPool,
}

impl PgBidRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BidRepository for PgBidRepository {
    async fn list_for_listing(&self, listing_id: Uuid) -> Result<Vec<BidWithBidder>> {
        sqlx::query_as::<_, BidWithBidder>(
            r#"
            SELECT b.id, b.amount, b.user_id, u.username, b.listing_id, b.created_at
            FROM bids b
            JOIN users u ON u.id = b.user_id
            WHERE b.listing_id = $1
            ORDER BY b.amount DESC
            "#,
        )
        .bind(listing_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bids: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn place(&self, bid: NewBid, check: &BidCheck) -> Result<Bid> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin bid transaction: {:?}", e);
            AppError::Database(e)
        })?;

        // Row lock serialises concurrent bids on the same listing
        let listing = sqlx::query_as::<_, Listing>(
            r#"
            SELECT id, item_name, item_description, image_url,
                   start_time, end_time, start_bid, closed, owner_id, category_id
            FROM listings
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(bid.listing_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to lock listing: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Listing {} not found", bid.listing_id)))?;

        let existing = sqlx::query_as::<_, Bid>(
            r#"
            SELECT id, amount, user_id, listing_id, created_at
            FROM bids
            WHERE listing_id = $1
            "#,
        )
        .bind(bid.listing_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load bids: {:?}", e);
            AppError::Database(e)
        })?;

        check(&listing, &existing)?;

        let placed = sqlx::query_as::<_, Bid>(
            r#"
            INSERT INTO bids (id, amount, user_id, listing_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, amount, user_id, listing_id, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(bid.amount)
        .bind(bid.user_id)
        .bind(bid.listing_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert bid: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO watchlist (user_id, listing_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(bid.user_id)
        .bind(bid.listing_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to watch listing after bid: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit bid: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(placed)
    }
}

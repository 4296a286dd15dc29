use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::ListingRepository;
use crate::core::error::{AppError, Result};
use crate::features::listings::models::{Listing, ListingFilter, NewListing};

const LISTING_COLUMNS: &str = "l.id, l.item_name, l.item_description, l.image_url, \
     l.start_time, l.end_time, l.start_bid, l.closed, l.owner_id, l.category_id";

pub struct PgListingRepository {
    pool: PgPool,
}

impl PgListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Listing>> {
        let sql = format!("SELECT {LISTING_COLUMNS} FROM listings l WHERE l.id = $1");

        sqlx::query_as::<_, Listing>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get listing by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, listing: NewListing) -> Result<Listing> {
        sqlx::query_as::<_, Listing>(
            r#"
            INSERT INTO listings (
                id, item_name, item_description, image_url,
                start_time, end_time, start_bid, owner_id, category_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, item_name, item_description, image_url,
                      start_time, end_time, start_bid, closed, owner_id, category_id
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&listing.item_name)
        .bind(&listing.item_description)
        .bind(&listing.image_url)
        .bind(listing.start_time)
        .bind(listing.end_time)
        .bind(listing.start_bid)
        .bind(listing.owner_id)
        .bind(listing.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create listing: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn save(&self, listing: &Listing) -> Result<Listing> {
        sqlx::query_as::<_, Listing>(
            r#"
            UPDATE listings
            SET item_name = $2,
                item_description = $3,
                image_url = $4,
                end_time = $5,
                start_bid = $6,
                closed = $7,
                category_id = $8
            WHERE id = $1
            RETURNING id, item_name, item_description, image_url,
                      start_time, end_time, start_bid, closed, owner_id, category_id
            "#,
        )
        .bind(listing.id)
        .bind(&listing.item_name)
        .bind(&listing.item_description)
        .bind(&listing.image_url)
        .bind(listing.end_time)
        .bind(listing.start_bid)
        .bind(listing.closed)
        .bind(listing.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update listing: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Listing {} not found", listing.id)))
    }

    async fn list(&self, filter: ListingFilter) -> Result<Vec<Listing>> {
        let result = match filter {
            ListingFilter::Active { now } => {
                let sql = format!(
                    "SELECT {LISTING_COLUMNS} FROM listings l \
                     WHERE l.closed = FALSE AND l.end_time > $1 \
                     ORDER BY l.start_time DESC"
                );
                sqlx::query_as::<_, Listing>(&sql)
                    .bind(now)
                    .fetch_all(&self.pool)
                    .await
            }
            ListingFilter::ActiveInCategory { title, now } => {
                let sql = format!(
                    "SELECT {LISTING_COLUMNS} FROM listings l \
                     JOIN categories c ON c.id = l.category_id \
                     WHERE c.title = $1 AND l.closed = FALSE AND l.end_time > $2 \
                     ORDER BY l.start_time DESC"
                );
                sqlx::query_as::<_, Listing>(&sql)
                    .bind(title)
                    .bind(now)
                    .fetch_all(&self.pool)
                    .await
            }
            ListingFilter::WatchedBy { user_id, now } => {
                let sql = format!(
                    "SELECT {LISTING_COLUMNS} FROM listings l \
                     JOIN watchlist w ON w.listing_id = l.id \
                     WHERE w.user_id = $1 AND l.closed = FALSE AND l.end_time > $2 \
                     ORDER BY l.start_time DESC"
                );
                sqlx::query_as::<_, Listing>(&sql)
                    .bind(user_id)
                    .bind(now)
                    .fetch_all(&self.pool)
                    .await
            }
            ListingFilter::Closed => {
                let sql = format!(
                    "SELECT {LISTING_COLUMNS} FROM listings l \
                     WHERE l.closed = TRUE \
                     ORDER BY l.end_time ASC"
                );
                sqlx::query_as::<_, Listing>(&sql)
                    .fetch_all(&self.pool)
                    .await
            }
        };

        result.map_err(|e| {
            tracing::error!("Failed to list listings: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn mark_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE listings SET closed = TRUE WHERE closed = FALSE AND end_time <= $1",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to expire listings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected())
    }
}

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::WatchlistRepository;
use crate::core::error::{AppError, Result};

pub struct PgWatchlistRepository {
    pool: PgPool,
}

impl PgWatchlistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WatchlistRepository for PgWatchlistRepository {
    async fn contains(&self, user_id: Uuid, listing_id: Uuid) -> Result<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM watchlist WHERE user_id = $1 AND listing_id = $2)",
        )
        .bind(user_id)
        .bind(listing_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check watchlist: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn add(&self, user_id: Uuid, listing_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO watchlist (user_id, listing_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(listing_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add to watchlist: {:?}", e);
            AppError::Database(e)
        })?;
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, listing_id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM watchlist WHERE user_id = $1 AND listing_id = $2")
            .bind(user_id)
            .bind(listing_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to remove from watchlist: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }
}

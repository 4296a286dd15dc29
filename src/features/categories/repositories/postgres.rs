use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::CategoryRepository;
use crate::core::database::is_unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, title, created_at FROM categories ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, title, created_at FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by ID: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn insert(&self, title: &str) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, title)
            VALUES ($1, $2)
            RETURNING id, title, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::Conflict(format!("Category '{}' already exists", title));
            }
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}

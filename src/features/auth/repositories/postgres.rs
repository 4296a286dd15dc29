use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::{SessionRepository, UserRepository};
use crate::core::database::is_unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::{NewUser, Session, User};

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find(&self, id: Uuid) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, is_staff, date_joined
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user by ID: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, is_staff, date_joined
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user by username: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn insert(&self, user: NewUser) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, is_staff, date_joined
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::DuplicateUsername;
            }
            tracing::error!("Failed to create user: {:?}", e);
            AppError::Database(e)
        })
    }
}

pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn insert(&self, session: Session) -> Result<Session> {
        sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (id, user_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, created_at, expires_at
            "#,
        )
        .bind(session.id)
        .bind(session.user_id)
        .bind(session.created_at)
        .bind(session.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create session: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find(&self, id: Uuid) -> Result<Option<Session>> {
        sqlx::query_as::<_, Session>(
            r#"
            SELECT id, user_id, created_at, expires_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get session: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete session: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }

    async fn delete_expired(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE user_id = $1 AND expires_at <= $2
            "#,
        )
        .bind(user_id)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to prune expired sessions: {:?}", e);
            AppError::Database(e)
        })?;
        Ok(result.rows_affected())
    }
}

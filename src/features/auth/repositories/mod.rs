mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::models::{NewUser, Session, User};

pub use postgres::{PgSessionRepository, PgUserRepository};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<User>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Fails with `AppError::DuplicateUsername` when the username is taken.
    async fn insert(&self, user: NewUser) -> Result<User>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: Session) -> Result<Session>;

    async fn find(&self, id: Uuid) -> Result<Option<Session>>;

    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Removes the user's sessions that expired at or before `now`
    async fn delete_expired(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<u64>;
}

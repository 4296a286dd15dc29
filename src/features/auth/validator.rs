use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::models::AuthenticatedUser;
use super::repositories::{SessionRepository, UserRepository};
use super::services::TokenService;
use crate::core::error::AppError;

/// Resolves a bearer token to the user behind a live session
pub struct JwtValidator {
    tokens: Arc<TokenService>,
    sessions: Arc<dyn SessionRepository>,
    users: Arc<dyn UserRepository>,
}

impl JwtValidator {
    pub fn new(
        tokens: Arc<TokenService>,
        sessions: Arc<dyn SessionRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            tokens,
            sessions,
            users,
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let claims = self.tokens.verify(token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Auth("Malformed subject claim".to_string()))?;
        let session_id = Uuid::parse_str(&claims.sid)
            .map_err(|_| AppError::Auth("Malformed session claim".to_string()))?;

        // A signature alone is not enough: logout deletes the session row
        let session = self
            .sessions
            .find(session_id)
            .await?
            .filter(|s| s.user_id == user_id && s.is_active(Utc::now()))
            .ok_or_else(|| AppError::Auth("Session has ended".to_string()))?;

        let user = self
            .users
            .find(user_id)
            .await?
            .ok_or_else(|| AppError::Auth("User no longer exists".to_string()))?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            username: user.username,
            session_id: session.id,
            is_staff: user.is_staff,
        })
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Principal inserted into request extensions by the auth middleware
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub session_id: Uuid,
    pub is_staff: bool,
}

impl AuthenticatedUser {
    /// Staff users manage categories
    pub fn is_staff(&self) -> bool {
        self.is_staff
    }
}

/// Claims carried by session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID
    pub sub: String,
    /// Session ID
    pub sid: String,
    pub iss: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

//! Authorization guards for the application.
//!
//! Staff accounts manage the category list; every other protected route only
//! needs a logged-in user, which the `AuthenticatedUser` extractor covers.

use crate::core::error::AppError;
use crate::features::auth::models::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if user is staff.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireStaff(user): RequireStaff) { ... }
/// ```
pub struct RequireStaff(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireStaff
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_staff() {
            return Err(AppError::Forbidden("Staff access required".to_string()));
        }

        Ok(RequireStaff(user.clone()))
    }
}

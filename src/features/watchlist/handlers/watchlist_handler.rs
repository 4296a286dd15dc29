use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::listings::dtos::ListingResponseDto;
use crate::features::watchlist::dtos::WatchStatusDto;
use crate::features::watchlist::services::WatchlistService;
use crate::shared::types::{ApiResponse, Meta};

/// List watched listings that are still open
#[utoipa::path(
    get,
    path = "/watchlist/",
    responses(
        (status = 200, description = "Watched listings", body = ApiResponse<Vec<ListingResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "watchlist",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_watchlist(
    user: AuthenticatedUser,
    State(service): State<Arc<WatchlistService>>,
) -> Result<Json<ApiResponse<Vec<ListingResponseDto>>>> {
    let listings = service.list(&user, Utc::now()).await?;
    let meta = Meta::count(&listings);
    Ok(Json(ApiResponse::success(Some(listings), None, Some(meta))))
}

/// Toggle a listing on the watchlist
#[utoipa::path(
    post,
    path = "/watchlist/{id}/edit/",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Watch state after the toggle", body = ApiResponse<WatchStatusDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Listing not found")
    ),
    tag = "watchlist",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn toggle_watch(
    user: AuthenticatedUser,
    State(service): State<Arc<WatchlistService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WatchStatusDto>>> {
    let status = service.toggle(&user, id).await?;
    Ok(Json(ApiResponse::success(Some(status), None, None)))
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::listings::dtos::{CreateListingDto, ListingDetailDto, ListingResponseDto};
use crate::features::listings::services::ListingService;
use crate::shared::types::{ApiResponse, Meta};

/// List active listings
///
/// Open listings whose end time has not passed, newest first.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Active listings", body = ApiResponse<Vec<ListingResponseDto>>),
    ),
    tag = "listings"
)]
pub async fn list_active(
    State(service): State<Arc<ListingService>>,
) -> Result<Json<ApiResponse<Vec<ListingResponseDto>>>> {
    let listings = service.list_active(Utc::now()).await?;
    let meta = Meta::count(&listings);
    Ok(Json(ApiResponse::success(Some(listings), None, Some(meta))))
}

/// List closed listings
///
/// Flags listings whose end time has passed before listing, soonest ended first.
#[utoipa::path(
    get,
    path = "/listing/closed/",
    responses(
        (status = 200, description = "Closed listings", body = ApiResponse<Vec<ListingResponseDto>>),
    ),
    tag = "listings"
)]
pub async fn list_closed(
    State(service): State<Arc<ListingService>>,
) -> Result<Json<ApiResponse<Vec<ListingResponseDto>>>> {
    let listings = service.list_closed(Utc::now()).await?;
    let meta = Meta::count(&listings);
    Ok(Json(ApiResponse::success(Some(listings), None, Some(meta))))
}

/// Get listing page
#[utoipa::path(
    get,
    path = "/listing/{id}/",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing with bids and comments", body = ApiResponse<ListingDetailDto>),
        (status = 404, description = "Listing not found")
    ),
    tag = "listings"
)]
pub async fn get_listing(
    State(service): State<Arc<ListingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ListingDetailDto>>> {
    let detail = service.detail(id, Utc::now()).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Create a listing
#[utoipa::path(
    post,
    path = "/listing/create/",
    request_body = CreateListingDto,
    responses(
        (status = 201, description = "Listing created", body = ApiResponse<ListingResponseDto>),
        (status = 400, description = "Validation error or end time not in the future"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "listings",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_listing(
    user: AuthenticatedUser,
    State(service): State<Arc<ListingService>>,
    AppJson(dto): AppJson<CreateListingDto>,
) -> Result<(StatusCode, Json<ApiResponse<ListingResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let listing = service.create(&user, dto, Utc::now()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(listing), None, None)),
    ))
}

/// Close a listing
///
/// Only the owner may close; the end time becomes now.
#[utoipa::path(
    post,
    path = "/listing/{id}/close/",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing closed", body = ApiResponse<ListingResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner of the listing"),
        (status = 404, description = "Listing not found")
    ),
    tag = "listings",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn close_listing(
    user: AuthenticatedUser,
    State(service): State<Arc<ListingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ListingResponseDto>>> {
    let listing = service.close(id, &user, Utc::now()).await?;
    Ok(Json(ApiResponse::success(
        Some(listing),
        Some("Listing closed".to_string()),
        None,
    )))
}

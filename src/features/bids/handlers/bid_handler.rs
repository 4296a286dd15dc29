use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::bids::dtos::{BidResponseDto, CreateBidDto};
use crate::features::bids::services::BidService;
use crate::shared::types::ApiResponse;

/// Place a bid on a listing
///
/// The bid must beat every existing bid and be at least the starting bid.
#[utoipa::path(
    post,
    path = "/listing/{id}/bid/",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    request_body = CreateBidDto,
    responses(
        (status = 201, description = "Bid accepted", body = ApiResponse<BidResponseDto>),
        (status = 400, description = "Bid too low"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Listing not found"),
        (status = 409, description = "Auction already ended")
    ),
    tag = "bids",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn place_bid(
    user: AuthenticatedUser,
    State(service): State<Arc<BidService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateBidDto>,
) -> Result<(StatusCode, Json<ApiResponse<BidResponseDto>>)> {
    let bid = service.place_bid(id, &user, dto, Utc::now()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(bid), None, None)),
    ))
}

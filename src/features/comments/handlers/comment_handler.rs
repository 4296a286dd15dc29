use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto};
use crate::features::comments::services::CommentService;
use crate::shared::types::ApiResponse;

/// Comment on a listing
#[utoipa::path(
    post,
    path = "/listing/{id}/comment/",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment added", body = ApiResponse<CommentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Listing not found")
    ),
    tag = "comments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn add_comment(
    user: AuthenticatedUser,
    State(service): State<Arc<CommentService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let comment = service.add(id, &user, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(comment), None, None)),
    ))
}

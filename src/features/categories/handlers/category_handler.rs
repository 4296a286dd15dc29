use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireStaff;
use crate::features::categories::dtos::{
    CategoryPageDto, CategoryPageQuery, CategoryResponseDto, CreateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// Browse categories
///
/// Returns every category. When `category` names one, also returns its open
/// listings; otherwise `listings` is null.
#[utoipa::path(
    get,
    path = "/categories/",
    params(CategoryPageQuery),
    responses(
        (status = 200, description = "Categories page", body = ApiResponse<CategoryPageDto>),
    ),
    tag = "categories"
)]
pub async fn browse_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<CategoryPageQuery>,
) -> Result<Json<ApiResponse<CategoryPageDto>>> {
    let page = service.browse(query.category, Utc::now()).await?;
    Ok(Json(ApiResponse::success(Some(page), None, None)))
}

/// Create a category (staff only)
#[utoipa::path(
    post,
    path = "/categories/new/",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required"),
        (status = 409, description = "Title already exists")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_category(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(category), None, None)),
    ))
}

/// Delete a category (staff only)
///
/// Listings in the category are kept and lose their category.
#[utoipa::path(
    post,
    path = "/categories/{id}/delete/",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_category(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted".to_string()),
        None,
    )))
}

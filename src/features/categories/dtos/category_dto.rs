use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::features::listings::dtos::ListingResponseDto;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub title: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            title: c.title,
        }
    }
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(
        length(min = 1, max = 50, message = "Title must be 1-50 characters"),
        regex(
            path = *crate::shared::validation::CATEGORY_TITLE_REGEX,
            message = "Title must not start or end with whitespace"
        )
    )]
    pub title: String,
}

/// Query params for the categories page
#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryPageQuery {
    /// Title of the category to show listings for
    pub category: Option<String>,
}

/// Response DTO for the categories page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryPageDto {
    /// All categories ordered by title
    pub categories: Vec<CategoryResponseDto>,
    /// Open listings of the selected category; null when none was selected
    pub listings: Option<Vec<ListingResponseDto>>,
}

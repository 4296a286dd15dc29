use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::bids::{dtos as bids_dtos, handlers as bids_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::comments::{dtos as comments_dtos, handlers as comments_handlers};
use crate::features::listings::{
    dtos as listings_dtos, handlers as listings_handlers, lifecycle, models as listings_models,
};
use crate::features::watchlist::{dtos as watchlist_dtos, handlers as watchlist_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::logout,
        auth::handlers::get_me,
        // Listings
        listings_handlers::list_active,
        listings_handlers::list_closed,
        listings_handlers::get_listing,
        listings_handlers::create_listing,
        listings_handlers::close_listing,
        // Bids
        bids_handlers::place_bid,
        // Comments
        comments_handlers::add_comment,
        // Watchlist
        watchlist_handlers::get_watchlist,
        watchlist_handlers::toggle_watch,
        // Categories
        categories_handlers::browse_categories,
        categories_handlers::create_category,
        categories_handlers::delete_category,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::dtos::RegisterRequestDto,
            auth::dtos::LoginRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::UserResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::UserResponseDto>,
            // Listings
            listings_models::ListingStatus,
            lifecycle::TimeRemaining,
            listings_dtos::CreateListingDto,
            listings_dtos::ListingResponseDto,
            listings_dtos::ListingDetailDto,
            ApiResponse<listings_dtos::ListingResponseDto>,
            ApiResponse<Vec<listings_dtos::ListingResponseDto>>,
            ApiResponse<listings_dtos::ListingDetailDto>,
            // Bids
            bids_dtos::CreateBidDto,
            bids_dtos::BidResponseDto,
            ApiResponse<bids_dtos::BidResponseDto>,
            // Comments
            comments_dtos::CreateCommentDto,
            comments_dtos::CommentResponseDto,
            ApiResponse<comments_dtos::CommentResponseDto>,
            // Watchlist
            watchlist_dtos::WatchStatusDto,
            ApiResponse<watchlist_dtos::WatchStatusDto>,
            // Categories
            categories_dtos::CategoryResponseDto,
            categories_dtos::CreateCategoryDto,
            categories_dtos::CategoryPageDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<categories_dtos::CategoryPageDto>,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and sessions"),
        (name = "listings", description = "Auction listings"),
        (name = "bids", description = "Bidding on listings"),
        (name = "comments", description = "Comments on listings"),
        (name = "watchlist", description = "Per-user watched listings"),
        (name = "categories", description = "Listing categories"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Auctions API",
        version = "0.1.0",
        description = "API documentation for the auctions service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

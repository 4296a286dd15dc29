use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, middleware::from_fn_with_state, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::auth::repositories::{SessionRepository, UserRepository};
use crate::features::auth::{routes as auth_routes, AuthService, JwtValidator, TokenService};
use crate::features::bids::repositories::BidRepository;
use crate::features::bids::{routes as bids_routes, BidService};
use crate::features::categories::repositories::CategoryRepository;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::comments::repositories::CommentRepository;
use crate::features::comments::{routes as comments_routes, CommentService};
use crate::features::listings::repositories::ListingRepository;
use crate::features::listings::{routes as listings_routes, ListingService};
use crate::features::watchlist::repositories::WatchlistRepository;
use crate::features::watchlist::{routes as watchlist_routes, WatchlistService};

/// Storage backends, one per entity
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub listings: Arc<dyn ListingRepository>,
    pub bids: Arc<dyn BidRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub watchlist: Arc<dyn WatchlistRepository>,
}

/// Services shared by every request
pub struct AppServices {
    pub auth: Arc<AuthService>,
    pub validator: Arc<JwtValidator>,
    pub listings: Arc<ListingService>,
    pub bids: Arc<BidService>,
    pub comments: Arc<CommentService>,
    pub watchlist: Arc<WatchlistService>,
    pub categories: Arc<CategoryService>,
}

impl AppServices {
    pub fn new(repos: Repositories, tokens: Arc<TokenService>) -> Self {
        Self {
            auth: Arc::new(AuthService::new(
                Arc::clone(&repos.users),
                Arc::clone(&repos.sessions),
                Arc::clone(&tokens),
            )),
            validator: Arc::new(JwtValidator::new(
                tokens,
                Arc::clone(&repos.sessions),
                Arc::clone(&repos.users),
            )),
            listings: Arc::new(ListingService::new(
                Arc::clone(&repos.listings),
                Arc::clone(&repos.bids),
                Arc::clone(&repos.comments),
                Arc::clone(&repos.categories),
            )),
            bids: Arc::new(BidService::new(Arc::clone(&repos.bids))),
            comments: Arc::new(CommentService::new(
                Arc::clone(&repos.comments),
                Arc::clone(&repos.listings),
            )),
            watchlist: Arc::new(WatchlistService::new(
                Arc::clone(&repos.watchlist),
                Arc::clone(&repos.listings),
            )),
            categories: Arc::new(CategoryService::new(
                Arc::clone(&repos.categories),
                Arc::clone(&repos.listings),
            )),
        }
    }
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Application router with every feature route and the HTTP layers
pub fn build_app(services: &AppServices, config: &AppConfig) -> Router {
    // Protected routes (require a live session)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(Arc::clone(&services.auth)))
        .merge(listings_routes::protected_routes(Arc::clone(
            &services.listings,
        )))
        .merge(bids_routes::routes(Arc::clone(&services.bids)))
        .merge(comments_routes::routes(Arc::clone(&services.comments)))
        .merge(watchlist_routes::routes(Arc::clone(&services.watchlist)))
        .merge(categories_routes::staff_routes(Arc::clone(
            &services.categories,
        )))
        .route_layer(from_fn_with_state(
            Arc::clone(&services.validator),
            middleware::auth_middleware,
        ));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(Arc::clone(&services.auth)))
        .merge(listings_routes::public_routes(Arc::clone(&services.listings)))
        .merge(categories_routes::public_routes(Arc::clone(
            &services.categories,
        )))
        .route("/health", get(health_check));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

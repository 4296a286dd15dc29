use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::listings::handlers;
use crate::features::listings::services::ListingService;

/// Public listing routes (no authentication required)
pub fn public_routes(service: Arc<ListingService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_active))
        .route("/listing/closed/", get(handlers::list_closed))
        .route("/listing/{id}/", get(handlers::get_listing))
        .with_state(service)
}

/// Protected listing routes (require a live session)
pub fn protected_routes(service: Arc<ListingService>) -> Router {
    Router::new()
        .route("/listing/create/", post(handlers::create_listing))
        .route("/listing/{id}/close/", post(handlers::close_listing))
        .with_state(service)
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Public category routes (no authentication required)
pub fn public_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories/", get(handlers::browse_categories))
        .with_state(service)
}

/// Category management routes
///
/// Note: these sit behind the auth middleware and additionally require staff
pub fn staff_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/categories/new/", post(handlers::create_category))
        .route("/categories/{id}/delete/", post(handlers::delete_category))
        .with_state(service)
}

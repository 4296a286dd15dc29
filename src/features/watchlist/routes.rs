use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::watchlist::handlers;
use crate::features::watchlist::services::WatchlistService;

/// Create routes for the watchlist feature
///
/// Note: every route here requires a live session
pub fn routes(service: Arc<WatchlistService>) -> Router {
    Router::new()
        .route("/watchlist/", get(handlers::get_watchlist))
        .route("/watchlist/{id}/edit/", post(handlers::toggle_watch))
        .with_state(service)
}

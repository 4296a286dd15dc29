use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::bids::handlers;
use crate::features::bids::services::BidService;

/// Create routes for the bids feature
///
/// Note: every route here requires a live session
pub fn routes(service: Arc<BidService>) -> Router {
    Router::new()
        .route("/listing/{id}/bid/", post(handlers::place_bid))
        .with_state(service)
}

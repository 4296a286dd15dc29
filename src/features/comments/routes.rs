use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::comments::handlers;
use crate::features::comments::services::CommentService;

pub fn routes(service: Arc<CommentService>) -> Router {
    Router::new()
        .route("/listing/{id}/comment/", post(handlers::add_comment))
        .with_state(service)
}

//! End-to-end flows through the full router over the in-memory store.

mod watchlist;

use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use crate::shared::test_helpers::bearer;

/// Creates a listing through the API and returns its id
async fn create_listing(server: &TestServer, token: &str, name: &str, start_bid: &str) -> String {
    let response = server
        .post("/listing/create/")
        .add_header(axum::http::header::AUTHORIZATION, bearer(token))
        .json(&json!({
            "item_name": name,
            "item_description": format!("A fine {}", name),
            "start_bid": start_bid,
            "end_time": Utc::now() + Duration::days(2),
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    body["data"]["id"].as_str().unwrap().to_string()
}

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, StatusCode};
use axum::Router;
use axum_test::TestServer;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::Fake;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::{build_app, AppServices, Repositories};
use crate::core::config::{AppConfig, AuthConfig};
use crate::features::auth::TokenService;
use crate::modules::persistence::InMemoryStore;

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret-that-is-at-least-32-characters".to_string(),
        issuer: "auctions".to_string(),
        audience: "auctions-web".to_string(),
        session_ttl: Duration::from_secs(3600),
        jwt_leeway: Duration::ZERO,
    }
}

fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 1024 * 1024,
    }
}

/// Full application router over an in-memory store
pub fn test_app() -> (Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let repos = Repositories {
        users: Arc::new(store.clone()),
        sessions: Arc::new(store.clone()),
        categories: Arc::new(store.clone()),
        listings: Arc::new(store.clone()),
        bids: Arc::new(store.clone()),
        comments: Arc::new(store.clone()),
        watchlist: Arc::new(store.clone()),
    };
    let tokens = Arc::new(TokenService::new(&test_auth_config()));
    let services = AppServices::new(repos, tokens);

    (build_app(&services, &test_app_config()), store)
}

pub fn test_server() -> (TestServer, InMemoryStore) {
    let (app, store) = test_app();
    (TestServer::new(app).unwrap(), store)
}

pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Registers a fresh user and returns `(username, access_token)`
pub async fn register_user(server: &TestServer, prefix: &str) -> (String, String) {
    let username = unique_username(prefix);
    let email: String = SafeEmail().fake();
    let password: String = Password(12..20).fake();

    let response = server
        .post("/register/")
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
            "confirmation": password,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    let token = body["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string();
    (username, token)
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

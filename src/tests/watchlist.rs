use axum::http::header;
use serde_json::Value;

use super::create_listing;
use crate::shared::test_helpers::{bearer, register_user, test_server};

#[tokio::test]
async fn toggling_twice_restores_the_watchlist() {
    let (server, _) = test_server();
    let (_, seller) = register_user(&server, "seller").await;
    let (_, watcher) = register_user(&server, "watcher").await;
    let id = create_listing(&server, &seller, "Kettle", "8").await;

    let on: Value = server
        .post(&format!("/watchlist/{}/edit/", id))
        .add_header(header::AUTHORIZATION, bearer(&watcher))
        .await
        .json();
    assert_eq!(on["data"]["watching"], true);

    let listed: Value = server
        .get("/watchlist/")
        .add_header(header::AUTHORIZATION, bearer(&watcher))
        .await
        .json();
    assert_eq!(listed["meta"]["total"], 1);

    let off: Value = server
        .post(&format!("/watchlist/{}/edit/", id))
        .add_header(header::AUTHORIZATION, bearer(&watcher))
        .await
        .json();
    assert_eq!(off["data"]["watching"], false);

    let listed: Value = server
        .get("/watchlist/")
        .add_header(header::AUTHORIZATION, bearer(&watcher))
        .await
        .json();
    assert_eq!(listed["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn watchlists_are_per_user() {
    let (server, _) = test_server();
    let (_, seller) = register_user(&server, "seller").await;
    let (_, watcher) = register_user(&server, "watcher").await;
    let id = create_listing(&server, &seller, "Teapot", "8").await;

    server
        .post(&format!("/watchlist/{}/edit/", id))
        .add_header(header::AUTHORIZATION, bearer(&watcher))
        .await
        .assert_status_ok();

    let sellers: Value = server
        .get("/watchlist/")
        .add_header(header::AUTHORIZATION, bearer(&seller))
        .await
        .json();
    assert_eq!(sellers["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn watchlist_requires_a_session() {
    let (server, _) = test_server();

    server.get("/watchlist/").await.assert_status_unauthorized();
}

#[tokio::test]
async fn watching_an_unknown_listing_is_not_found() {
    let (server, _) = test_server();
    let (_, watcher) = register_user(&server, "watcher").await;

    server
        .post(&format!("/watchlist/{}/edit/", uuid::Uuid::now_v7()))
        .add_header(header::AUTHORIZATION, bearer(&watcher))
        .await
        .assert_status_not_found();
}

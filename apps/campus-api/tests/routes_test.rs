//! Integration tests for route mounting.
//!
//! These tests verify that the public endpoints are mounted at the
//! expected paths and methods.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post, put},
    Router,
};
use tower::ServiceExt;

/// Create a minimal test router that simulates the route table.
fn test_router() -> Router {
    Router::new()
        .route("/register", post(|| async { (StatusCode::OK, "register stub") }))
        .route("/login", post(|| async { (StatusCode::OK, "login stub") }))
        .route("/refresh", post(|| async { (StatusCode::OK, "refresh stub") }))
        .route("/logout", post(|| async { (StatusCode::OK, "logout stub") }))
        .route(
            "/user/update",
            put(|| async { (StatusCode::OK, "update stub") }),
        )
        .route(
            "/user/history",
            get(|| async { (StatusCode::OK, "history stub") }),
        )
}

async fn send(app: Router, method: &str, uri: &str) -> StatusCode {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    response.status()
}

#[tokio::test]
async fn register_route_exists() {
    assert_eq!(send(test_router(), "POST", "/register").await, StatusCode::OK);
}

#[tokio::test]
async fn login_route_exists() {
    assert_eq!(send(test_router(), "POST", "/login").await, StatusCode::OK);
}

#[tokio::test]
async fn refresh_route_exists() {
    assert_eq!(send(test_router(), "POST", "/refresh").await, StatusCode::OK);
}

#[tokio::test]
async fn logout_route_exists() {
    assert_eq!(send(test_router(), "POST", "/logout").await, StatusCode::OK);
}

#[tokio::test]
async fn user_update_route_is_put() {
    assert_eq!(send(test_router(), "PUT", "/user/update").await, StatusCode::OK);
    assert_eq!(
        send(test_router(), "POST", "/user/update").await,
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn user_history_route_is_get() {
    assert_eq!(send(test_router(), "GET", "/user/history").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    assert_eq!(
        send(test_router(), "POST", "/nope").await,
        StatusCode::NOT_FOUND
    );
}

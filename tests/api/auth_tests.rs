//! Authentication API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{TestApp, TEST_PASSWORD};

#[tokio::test]
async fn test_register_returns_user_and_token() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/auth/register/",
            json!({ "username": "alice", "email": "alice@example.com", "password": TEST_PASSWORD }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body["user"].get("password_hash").is_none());
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["access_token"].as_str().is_some());
}

#[tokio::test]
async fn test_register_with_taken_username_conflicts() {
    let app = TestApp::new().await;
    app.register("alice").await;

    let response = app
        .post(
            "/auth/register/",
            json!({ "username": "alice", "password": TEST_PASSWORD }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_with_short_password_fails() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/auth/register/",
            json!({ "username": "bob", "password": "short" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"][0]["field"], "password");
}

#[tokio::test]
async fn test_login_issues_usable_token() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    app.register("bob").await;

    let response = app
        .post(
            "/auth/login/",
            json!({ "username": "alice", "password": TEST_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let token = response.json()["access_token"].as_str().unwrap().to_string();

    // The token identifies alice, so she is left out of the user list.
    let users = app.get_auth("/users/", &token).await.json();
    assert_eq!(users["count"], 1);
    assert_ne!(users["results"][0]["id"], alice.id);
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.register("alice").await;

    let response = app
        .post(
            "/auth/login/",
            json!({ "username": "alice", "password": "not-the-password" }),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let app = TestApp::new().await;

    let response = app.get_auth("/users/", "not-a-jwt").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request(
            axum::http::Method::POST,
            "/auth/login/",
            Some(json!("just a string")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

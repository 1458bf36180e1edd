//! User API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

fn ids(page: &Value) -> Vec<i64> {
    page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_anonymous_listing_returns_all_users() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let response = app.get("/users/").await;

    assert_eq!(response.status, StatusCode::OK);
    let page = response.json();
    assert_eq!(page["count"], 2);
    assert_eq!(ids(&page), vec![alice.id, bob.id]);
    assert_eq!(page["next"], Value::Null);
    assert_eq!(page["previous"], Value::Null);
}

#[tokio::test]
async fn test_authenticated_listing_excludes_requester() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let carol = app.register("carol").await;

    let page = app.get_auth("/users/", &bob.token).await.json();

    assert_eq!(page["count"], 2);
    assert_eq!(ids(&page), vec![alice.id, carol.id]);
}

#[tokio::test]
async fn test_listing_is_paginated_by_ten() {
    let app = TestApp::new().await;
    for i in 0..12 {
        app.register(&format!("user{:02}", i)).await;
    }

    let first = app.get("/users/").await.json();
    assert_eq!(first["count"], 12);
    assert_eq!(first["results"].as_array().unwrap().len(), 10);
    assert_eq!(first["next"], "http://testserver/users/?page=2");
    assert_eq!(first["previous"], Value::Null);

    let second = app.get("/users/?page=2").await.json();
    assert_eq!(second["results"].as_array().unwrap().len(), 2);
    assert_eq!(second["next"], Value::Null);
    assert_eq!(second["previous"], "http://testserver/users/");

    let beyond = app.get("/users/?page=3").await;
    assert_eq!(beyond.status, StatusCode::NOT_FOUND);
    assert_eq!(beyond.json()["message"], "Invalid page.");
}

#[tokio::test]
async fn test_user_detail_lists_snippets() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let snippet = app
        .create_snippet(&alice, json!({ "code": "print(1)" }))
        .await;

    let response = app.get(&format!("/users/{}/", alice.id)).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["snippets"], json!([snippet["id"]]));
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/users/99/").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_users_may_only_delete_themselves() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let forbidden = app
        .delete(&format!("/users/{}/", alice.id), Some(&bob.token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let anonymous = app.delete(&format!("/users/{}/", alice.id), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let deleted = app
        .delete(&format!("/users/{}/", alice.id), Some(&alice.token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(
        app.get(&format!("/users/{}/", alice.id)).await.status,
        StatusCode::NOT_FOUND
    );

    // A token outliving its account no longer authenticates.
    assert_eq!(
        app.get_auth("/users/", &alice.token).await.status,
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_deleting_user_keeps_messages_without_author() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let chat_id = app.create_chat(&bob, "room", &[alice.id]).await;

    let posted = app
        .post(
            &format!("/chats/{}/messages/", chat_id),
            json!({ "text": "hello" }),
            Some(&alice.token),
        )
        .await;
    assert_eq!(posted.status, StatusCode::CREATED);
    assert_eq!(posted.json()["author"], alice.id);

    app.delete(&format!("/users/{}/", alice.id), Some(&alice.token))
        .await;

    let messages = app
        .get(&format!("/chats/{}/messages/", chat_id))
        .await
        .json();
    assert_eq!(messages["count"], 1);
    assert_eq!(messages["results"][0]["text"], "hello");
    assert_eq!(messages["results"][0]["author"], Value::Null);

    let chat = app.get(&format!("/chats/{}/", chat_id)).await.json();
    assert_eq!(chat["users"], json!([bob.id]));
}

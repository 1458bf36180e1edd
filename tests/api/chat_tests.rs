//! Chat API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_create_chat_adds_creator() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let response = app
        .post(
            "/chats/",
            json!({ "title": "lunch", "users": [bob.id] }),
            Some(&alice.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let chat = response.json();
    assert_eq!(chat["title"], "lunch");
    let mut users: Vec<i64> = serde_json::from_value(chat["users"].clone()).unwrap();
    users.sort_unstable();
    assert_eq!(users, vec![alice.id, bob.id]);
}

#[tokio::test]
async fn test_create_chat_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.post("/chats/", json!({ "title": "x" }), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_members_conflict() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let response = app
        .post(
            "/chats/",
            json!({ "users": [bob.id, bob.id] }),
            Some(&alice.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // Nothing of the failed chat is left behind.
    assert_eq!(app.get("/chats/").await.json()["count"], 0);
}

#[tokio::test]
async fn test_unknown_member_is_bad_request() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;

    let response = app
        .post("/chats/", json!({ "users": [404] }), Some(&alice.token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"][0]["field"], "users");
}

#[tokio::test]
async fn test_unknown_chat_is_not_found() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/chats/999/").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.delete("/chats/999/", None).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get("/chats/999/messages/").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_put_and_patch_title() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let chat_id = app.create_chat(&alice, "old", &[]).await;
    let uri = format!("/chats/{}/", chat_id);

    let patched = app.patch(&uri, json!({}), None).await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.json()["title"], "old");

    let replaced = app.put(&uri, json!({ "title": "new" }), None).await;
    assert_eq!(replaced.json()["title"], "new");

    let cleared = app.patch(&uri, json!({ "title": null }), None).await;
    assert_eq!(cleared.json()["title"], Value::Null);

    let too_long = app.put(&uri, json!({ "title": "x".repeat(101) }), None).await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_members_can_be_added_once() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let chat_id = app.create_chat(&alice, "room", &[]).await;
    let uri = format!("/chats/{}/users/", chat_id);

    let added = app.post(&uri, json!({ "user": bob.id }), None).await;
    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.json()["chat"], chat_id);

    let again = app.post(&uri, json!({ "user": bob.id }), None).await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let members = app.get(&uri).await.json();
    assert_eq!(members.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_messages_are_listed_oldest_first() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let chat_id = app.create_chat(&alice, "room", &[]).await;
    let uri = format!("/chats/{}/messages/", chat_id);

    for text in ["first", "second", "third"] {
        let response = app.post(&uri, json!({ "text": text }), Some(&alice.token)).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let page = app.get(&uri).await.json();
    let texts: Vec<&str> = page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);

    let anonymous = app.post(&uri, json!({ "text": "hi" }), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_blank_message_is_rejected() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let chat_id = app.create_chat(&alice, "room", &[]).await;
    let uri = format!("/chats/{}/messages/", chat_id);

    for text in ["", "   \n"] {
        let response = app.post(&uri, json!({ "text": text }), Some(&alice.token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "text {:?}", text);
        assert_eq!(response.json()["errors"][0]["field"], "text");
    }

    assert_eq!(app.get(&uri).await.json()["count"], 0);
}

#[tokio::test]
async fn test_deleting_chat_removes_messages_and_members() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let chat_id = app.create_chat(&alice, "room", &[bob.id]).await;
    app.post(
        &format!("/chats/{}/messages/", chat_id),
        json!({ "text": "bye" }),
        Some(&bob.token),
    )
    .await;

    let response = app.delete(&format!("/chats/{}/", chat_id), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let messages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE chat_id = ?1")
        .bind(chat_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    let members: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chat_users WHERE chat_id = ?1")
        .bind(chat_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!((messages, members), (0, 0));
}

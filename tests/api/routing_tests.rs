//! Routing and Format Suffix Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::TestApp;

#[test_case("/users/" ; "canonical")]
#[test_case("/users" ; "without trailing slash")]
#[test_case("/users.json" ; "format suffix")]
#[test_case("/users/?format=json" ; "format query")]
#[tokio::test]
async fn test_user_list_variants(uri: &str) {
    let app = TestApp::new().await;
    app.register("alice").await;

    let response = app.get(uri).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["count"], 1);
}

#[tokio::test]
async fn test_detail_suffixes() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let chat_id = app.create_chat(&alice, "room", &[]).await;

    let user = app.get(&format!("/users/{}.json", alice.id)).await;
    assert_eq!(user.status, StatusCode::OK);
    assert_eq!(user.json()["username"], "alice");

    let chat = app.get(&format!("/chats/{}/.json", chat_id)).await;
    assert_eq!(chat.status, StatusCode::OK);
    assert_eq!(chat.json()["title"], "room");
}

#[test_case("/users.xml" ; "unsupported suffix")]
#[test_case("/users/?format=api" ; "unsupported query")]
#[test_case("/nowhere/" ; "unknown route")]
#[tokio::test]
async fn test_not_found(uri: &str) {
    let app = TestApp::new().await;

    assert_eq!(app.get(uri).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_writes_accept_suffix() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;

    let response = app
        .post("/chats.json", json!({ "title": "suffixed" }), Some(&alice.token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_api_root_links() {
    let app = TestApp::new().await;

    let root = app.get("/").await.json();

    assert_eq!(root["users"], "http://testserver/users/");
    assert_eq!(root["chats"], "http://testserver/chats/");
    assert_eq!(root["snippets"], "http://testserver/snippets/");
}

#[tokio::test]
async fn test_pagination_links_keep_format_query() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    for i in 0..11 {
        app.create_chat(&alice, &format!("room {}", i), &[]).await;
    }

    let page = app.get("/chats/?format=json").await.json();

    assert_eq!(page["next"], "http://testserver/chats/?format=json&page=2");
}

#[tokio::test]
async fn test_percent_encoded_page_param() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    for i in 0..11 {
        app.create_chat(&alice, &format!("room {}", i), &[]).await;
    }

    let response = app.get("/chats/?pa%67e=%32").await;

    assert_eq!(response.status, StatusCode::OK);
    let page = response.json();
    assert_eq!(page["results"].as_array().unwrap().len(), 1);
    assert_eq!(page["previous"], "http://testserver/chats/");
}

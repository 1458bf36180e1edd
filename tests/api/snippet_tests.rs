//! Snippet API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

/// Text inside the `<style>` element.
fn style_block(html: &str) -> &str {
    let open = html.find("<style").expect("style block");
    let start = open + html[open..].find('>').expect("style tag end") + 1;
    let end = html.find("</style>").expect("style block end");
    &html[start..end]
}

/// Everything after the head, i.e. the visible document.
fn body(html: &str) -> &str {
    &html[html.find("<body").expect("body")..]
}

#[tokio::test]
async fn test_create_snippet_with_defaults() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;

    let snippet = app.create_snippet(&alice, json!({ "code": "print(1)" })).await;

    assert_eq!(snippet["language"], "python");
    assert_eq!(snippet["style"], "friendly");
    assert_eq!(snippet["title"], "");
    assert_eq!(snippet["linenos"], false);
    assert_eq!(snippet["owner"], alice.id);
}

#[tokio::test]
async fn test_highlight_contains_code() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let snippet = app
        .create_snippet(&alice, json!({ "code": "print(1)", "language": "python" }))
        .await;

    let response = app
        .get(&format!("/snippets/{}/highlight/", snippet["id"]))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("text/html"));
    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("print"));
    assert!(!html.contains("<td class=\"linenos\">"));
}

#[tokio::test]
async fn test_changing_style_only_changes_css() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let snippet = app
        .create_snippet(&alice, json!({ "code": "def f():\n    return 1" }))
        .await;
    let uri = format!("/snippets/{}/", snippet["id"]);
    let highlight_uri = format!("/snippets/{}/highlight/", snippet["id"]);

    let before = app.get(&highlight_uri).await.text();

    let patched = app
        .patch(&uri, json!({ "style": "solarized-dark" }), Some(&alice.token))
        .await;
    assert_eq!(patched.status, StatusCode::OK, "{}", patched.text());

    let after = app.get(&highlight_uri).await.text();
    assert_ne!(style_block(&before), style_block(&after));
    assert_eq!(body(&before), body(&after));
}

#[tokio::test]
async fn test_title_and_line_numbers_are_rendered() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let snippet = app
        .create_snippet(
            &alice,
            json!({ "code": "a = 1\nb = 2", "title": "<demo>", "linenos": true }),
        )
        .await;

    let html = app
        .get(&format!("/snippets/{}/highlight/", snippet["id"]))
        .await
        .text();

    assert!(html.contains("<title>&lt;demo&gt;</title>"));
    assert!(html.contains("<h2>&lt;demo&gt;</h2>"));
    assert!(html.contains("<table class=\"highlighttable\">"));
    assert!(html.contains("<td class=\"linenos\">"));
}

#[tokio::test]
async fn test_invalid_choices_are_rejected() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;

    let bad_language = app
        .post(
            "/snippets/",
            json!({ "code": "x", "language": "klingon" }),
            Some(&alice.token),
        )
        .await;
    assert_eq!(bad_language.status, StatusCode::BAD_REQUEST);
    let body = bad_language.json();
    assert_eq!(body["errors"][0]["field"], "language");
    assert_eq!(body["errors"][0]["message"], "\"klingon\" is not a valid choice.");

    let bad_style = app
        .post(
            "/snippets/",
            json!({ "code": "x", "style": "neon" }),
            Some(&alice.token),
        )
        .await;
    assert_eq!(bad_style.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_style.json()["errors"][0]["field"], "style");
}

#[tokio::test]
async fn test_snippets_are_listed_oldest_first() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let mut created = Vec::new();
    for code in ["one = 1", "two = 2", "three = 3"] {
        created.push(app.create_snippet(&alice, json!({ "code": code })).await["id"].clone());
    }

    let page = app.get("/snippets/").await.json();
    let listed: Vec<_> = page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].clone())
        .collect();

    assert_eq!(listed, created);
}

#[tokio::test]
async fn test_only_owner_may_modify() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let snippet = app.create_snippet(&alice, json!({ "code": "x = 1" })).await;
    let uri = format!("/snippets/{}/", snippet["id"]);

    let put = app
        .put(&uri, json!({ "code": "y = 2" }), Some(&bob.token))
        .await;
    assert_eq!(put.status, StatusCode::FORBIDDEN);

    let delete = app.delete(&uri, Some(&bob.token)).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let own_delete = app.delete(&uri, Some(&alice.token)).await;
    assert_eq!(own_delete.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get(&uri).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.post("/snippets/", json!({ "code": "x" }), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleting_owner_removes_snippets() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    app.create_snippet(&alice, json!({ "code": "x = 1" })).await;

    app.delete(&format!("/users/{}/", alice.id), Some(&alice.token))
        .await;

    assert_eq!(app.get("/snippets/").await.json()["count"], 0);
}

#[tokio::test]
async fn test_choices_list_python_and_friendly() {
    let app = TestApp::new().await;

    let choices = app.get("/snippets/choices/").await.json();

    let has = |list: &str, key: &str| {
        choices[list]
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["key"] == key)
    };
    assert!(has("languages", "python"));
    assert!(has("styles", "friendly"));
}

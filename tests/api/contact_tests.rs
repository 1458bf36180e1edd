//! Contacts API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_owner_adds_and_lists_contacts() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let uri = format!("/users/{}/contacts/", alice.id);

    let empty = app.get(&uri).await.json();
    assert_eq!(empty["count"], 0);

    let added = app
        .post(&uri, json!({ "contact": bob.id }), Some(&alice.token))
        .await;
    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.json()["contact"], bob.id);

    let page = app.get(&uri).await.json();
    assert_eq!(page["count"], 1);
    assert_eq!(page["results"][0]["username"], "bob");
}

#[tokio::test]
async fn test_duplicate_contact_conflicts() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let uri = format!("/users/{}/contacts/", alice.id);

    app.post(&uri, json!({ "contact": bob.id }), Some(&alice.token))
        .await;
    let again = app
        .post(&uri, json!({ "contact": bob.id }), Some(&alice.token))
        .await;

    assert_eq!(again.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_only_owner_may_change_contacts() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let uri = format!("/users/{}/contacts/", alice.id);

    let forbidden = app
        .post(&uri, json!({ "contact": bob.id }), Some(&bob.token))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let anonymous = app.post(&uri, json!({ "contact": bob.id }), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_self_and_unknown_contacts_are_rejected() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let uri = format!("/users/{}/contacts/", alice.id);

    let own = app
        .post(&uri, json!({ "contact": alice.id }), Some(&alice.token))
        .await;
    assert_eq!(own.status, StatusCode::BAD_REQUEST);

    let unknown = app
        .post(&uri, json!({ "contact": 999 }), Some(&alice.token))
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown.json()["errors"][0]["field"], "contact");
}

#[tokio::test]
async fn test_remove_contact() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    app.post(
        &format!("/users/{}/contacts/", alice.id),
        json!({ "contact": bob.id }),
        Some(&alice.token),
    )
    .await;
    let uri = format!("/users/{}/contacts/{}/", alice.id, bob.id);

    let removed = app.delete(&uri, Some(&alice.token)).await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let missing = app.delete(&uri, Some(&alice.token)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contacts_of_unknown_user_are_not_found() {
    let app = TestApp::new().await;

    assert_eq!(
        app.get("/users/42/contacts/").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_deleted_contact_leaves_the_list() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let uri = format!("/users/{}/contacts/", alice.id);
    app.post(&uri, json!({ "contact": bob.id }), Some(&alice.token))
        .await;

    app.delete(&format!("/users/{}/", bob.id), Some(&bob.token))
        .await;

    assert_eq!(app.get(&uri).await.json()["count"], 0);
}

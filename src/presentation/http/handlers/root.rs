//! API Root

use axum::{
    http::{header::HOST, HeaderMap},
    Json,
};
use serde::Serialize;

/// Links to the top-level collections
#[derive(Debug, Serialize)]
pub struct ApiRootResponse {
    pub users: String,
    pub chats: String,
    pub snippets: String,
}

/// `GET /`
pub async fn api_root(headers: HeaderMap) -> Json<ApiRootResponse> {
    let host = headers
        .get(HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let link = |path: &str| format!("http://{}/{}/", host, path);

    Json(ApiRootResponse {
        users: link("users"),
        chats: link("chats"),
        snippets: link("snippets"),
    })
}

//! Snippet Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

use crate::application::dto::request::{PatchSnippetRequest, SnippetRequest};
use crate::application::dto::response::{ChoicesResponse, SnippetResponse};
use crate::application::services::{SnippetService, SnippetServiceImpl};
use crate::infrastructure::repositories::SqliteSnippetRepository;
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};
use crate::startup::AppState;

fn snippet_service(state: &AppState) -> SnippetServiceImpl<SqliteSnippetRepository> {
    SnippetServiceImpl::new(
        Arc::new(SqliteSnippetRepository::new(state.db.clone())),
        state.highlighter.clone(),
    )
}

/// List snippets, oldest first
pub async fn list_snippets(
    State(state): State<AppState>,
    page: PageRequest,
) -> Result<Json<Page<SnippetResponse>>, AppError> {
    let snippets = snippet_service(&state).list_snippets(page).await?;
    Ok(Json(snippets.map(SnippetResponse::from)))
}

/// Create a snippet owned by the requester
pub async fn create_snippet(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<SnippetRequest>,
) -> Result<(StatusCode, Json<SnippetResponse>), AppError> {
    let snippet = snippet_service(&state)
        .create_snippet(auth.user_id, body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(snippet.into())))
}

/// Get a snippet
pub async fn get_snippet(
    State(state): State<AppState>,
    Path(snippet_id): Path<i64>,
) -> Result<Json<SnippetResponse>, AppError> {
    let snippet = snippet_service(&state).get_snippet(snippet_id).await?;
    Ok(Json(snippet.into()))
}

/// Replace a snippet
pub async fn replace_snippet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(snippet_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<SnippetRequest>,
) -> Result<Json<SnippetResponse>, AppError> {
    let snippet = snippet_service(&state)
        .replace_snippet(auth.user_id, snippet_id, body.into())
        .await?;
    Ok(Json(snippet.into()))
}

/// Partially update a snippet
pub async fn update_snippet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(snippet_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<PatchSnippetRequest>,
) -> Result<Json<SnippetResponse>, AppError> {
    let snippet = snippet_service(&state)
        .update_snippet(auth.user_id, snippet_id, body.into())
        .await?;
    Ok(Json(snippet.into()))
}

/// Delete a snippet
pub async fn delete_snippet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(snippet_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    snippet_service(&state)
        .delete_snippet(auth.user_id, snippet_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The highlighted HTML document of a snippet
pub async fn highlight_snippet(
    State(state): State<AppState>,
    Path(snippet_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let html = snippet_service(&state).highlighted(snippet_id).await?;
    Ok(Html(html))
}

/// Available languages and styles
pub async fn snippet_choices(State(state): State<AppState>) -> Json<ChoicesResponse> {
    let (languages, styles) = snippet_service(&state).choices();
    Json(ChoicesResponse::new(languages, styles))
}

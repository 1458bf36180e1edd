//! User Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::response::{UserDetailResponse, UserResponse};
use crate::application::services::{UserService, UserServiceImpl};
use crate::infrastructure::repositories::{SqliteSnippetRepository, SqliteUserRepository};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};
use crate::startup::AppState;

fn user_service(
    state: &AppState,
) -> UserServiceImpl<SqliteUserRepository, SqliteSnippetRepository> {
    UserServiceImpl::new(
        Arc::new(SqliteUserRepository::new(state.db.clone())),
        Arc::new(SqliteSnippetRepository::new(state.db.clone())),
    )
}

/// List users, leaving out the requester when authenticated
pub async fn list_users(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    page: PageRequest,
) -> Result<Json<Page<UserResponse>>, AppError> {
    let users = user_service(&state)
        .list_users(auth.map(|a| a.user_id), page)
        .await?;

    Ok(Json(users.map(UserResponse::from)))
}

/// Get a user with their snippet IDs
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserDetailResponse>, AppError> {
    let details = user_service(&state).get_user(user_id).await?;
    Ok(Json(details.into()))
}

/// Delete the requester's own account
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    user_service(&state)
        .delete_user(auth.user_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

//! Chat Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{
    AddMemberRequest, CreateChatRequest, PatchChatRequest, ReplaceChatRequest,
};
use crate::application::dto::response::{ChatResponse, ChatUserResponse, UserResponse};
use crate::application::services::{ChatService, ChatServiceImpl};
use crate::infrastructure::repositories::{SqliteChatRepository, SqliteUserRepository};
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};
use crate::startup::AppState;

fn chat_service(state: &AppState) -> ChatServiceImpl<SqliteChatRepository, SqliteUserRepository> {
    ChatServiceImpl::new(
        Arc::new(SqliteChatRepository::new(state.db.clone())),
        Arc::new(SqliteUserRepository::new(state.db.clone())),
    )
}

/// List chats
pub async fn list_chats(
    State(state): State<AppState>,
    page: PageRequest,
) -> Result<Json<Page<ChatResponse>>, AppError> {
    let chats = chat_service(&state).list_chats(page).await?;
    Ok(Json(chats.map(ChatResponse::from)))
}

/// Create a chat with the requester as a member
pub async fn create_chat(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<CreateChatRequest>,
) -> Result<(StatusCode, Json<ChatResponse>), AppError> {
    let chat = chat_service(&state)
        .create_chat(auth.user_id, body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(chat.into())))
}

/// Get a chat
pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<Json<ChatResponse>, AppError> {
    let chat = chat_service(&state).get_chat(chat_id).await?;
    Ok(Json(chat.into()))
}

/// Replace a chat
pub async fn replace_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<ReplaceChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let chat = chat_service(&state)
        .update_chat(chat_id, body.into())
        .await?;
    Ok(Json(chat.into()))
}

/// Partially update a chat
pub async fn update_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<PatchChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let chat = chat_service(&state)
        .update_chat(chat_id, body.into())
        .await?;
    Ok(Json(chat.into()))
}

/// Delete a chat with its messages and memberships
pub async fn delete_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    chat_service(&state).delete_chat(chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List chat members
pub async fn list_members(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let members = chat_service(&state).list_members(chat_id).await?;
    Ok(Json(members.into_iter().map(UserResponse::from).collect()))
}

/// Add a member to a chat
pub async fn add_member(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<AddMemberRequest>,
) -> Result<(StatusCode, Json<ChatUserResponse>), AppError> {
    let member = chat_service(&state).add_member(chat_id, body.user).await?;
    Ok((StatusCode::CREATED, Json(member.into())))
}

//! Message Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::SendMessageRequest;
use crate::application::dto::response::MessageResponse;
use crate::application::services::{MessageService, MessageServiceImpl};
use crate::infrastructure::repositories::{SqliteChatRepository, SqliteMessageRepository};
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};
use crate::startup::AppState;

fn message_service(
    state: &AppState,
) -> MessageServiceImpl<SqliteMessageRepository, SqliteChatRepository> {
    MessageServiceImpl::new(
        Arc::new(SqliteMessageRepository::new(state.db.clone())),
        Arc::new(SqliteChatRepository::new(state.db.clone())),
    )
}

/// List the messages of a chat, oldest first
pub async fn list_messages(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    page: PageRequest,
) -> Result<Json<Page<MessageResponse>>, AppError> {
    let messages = message_service(&state)
        .list_messages(chat_id, page)
        .await?;
    Ok(Json(messages.map(MessageResponse::from)))
}

/// Post a message as the requester
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chat_id): Path<i64>,
    ValidatedJson(body): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let message = message_service(&state)
        .send_message(chat_id, auth.user_id, body.text)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into())))
}

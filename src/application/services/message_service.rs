//! Message Service
//!
//! Posting and reading chat messages.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ChatRepository, Message, MessageRepository};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// One page of the messages of a chat, oldest first.
    async fn list_messages(
        &self,
        chat_id: i64,
        page: PageRequest,
    ) -> Result<Page<Message>, MessageError>;

    /// Post a message in a chat.
    async fn send_message(
        &self,
        chat_id: i64,
        author_id: i64,
        text: String,
    ) -> Result<Message, MessageError>;
}

/// Message service errors
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("Chat not found")]
    ChatNotFound,

    #[error("This field may not be blank.")]
    BlankText,

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<MessageError> for AppError {
    fn from(e: MessageError) -> Self {
        match e {
            MessageError::ChatNotFound => AppError::NotFound("Chat not found".into()),
            MessageError::BlankText => {
                AppError::invalid_field("text", "This field may not be blank.")
            }
            MessageError::Repository(e) => e,
        }
    }
}

/// MessageService implementation
pub struct MessageServiceImpl<M, C>
where
    M: MessageRepository,
    C: ChatRepository,
{
    message_repo: Arc<M>,
    chat_repo: Arc<C>,
}

impl<M, C> MessageServiceImpl<M, C>
where
    M: MessageRepository,
    C: ChatRepository,
{
    pub fn new(message_repo: Arc<M>, chat_repo: Arc<C>) -> Self {
        Self {
            message_repo,
            chat_repo,
        }
    }

    async fn ensure_chat(&self, chat_id: i64) -> Result<(), MessageError> {
        match self.chat_repo.find_by_id(chat_id).await? {
            Some(_) => Ok(()),
            None => Err(MessageError::ChatNotFound),
        }
    }
}

#[async_trait]
impl<M, C> MessageService for MessageServiceImpl<M, C>
where
    M: MessageRepository + 'static,
    C: ChatRepository + 'static,
{
    async fn list_messages(
        &self,
        chat_id: i64,
        page: PageRequest,
    ) -> Result<Page<Message>, MessageError> {
        self.ensure_chat(chat_id).await?;

        let count = self.message_repo.count_by_chat(chat_id).await?;
        let messages = self
            .message_repo
            .list_by_chat(chat_id, page.limit(), page.offset())
            .await?;

        Ok(page.into_page(count, messages)?)
    }

    async fn send_message(
        &self,
        chat_id: i64,
        author_id: i64,
        text: String,
    ) -> Result<Message, MessageError> {
        if text.trim().is_empty() {
            return Err(MessageError::BlankText);
        }
        self.ensure_chat(chat_id).await?;

        let message = self
            .message_repo
            .create(chat_id, Some(author_id), text)
            .await?;

        tracing::debug!(message_id = message.id, chat_id, author_id, "Message sent");
        Ok(message)
    }
}

//! Message entity and repository trait.
//!
//! Maps to the `messages` table. The author reference is cleared when the
//! authoring user is deleted; the message itself goes away with its chat.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::error::AppError;

/// A text message posted in a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: i64,
    pub create_time: DateTime<Utc>,
    pub text: String,
    /// `None` once the author's account is deleted
    pub author_id: Option<i64>,
    pub chat_id: i64,
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message, stamping its creation time.
    async fn create(
        &self,
        chat_id: i64,
        author_id: Option<i64>,
        text: String,
    ) -> Result<Message, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError>;

    /// Messages of a chat, oldest first.
    async fn list_by_chat(&self, chat_id: i64, limit: i64, offset: i64)
        -> Result<Vec<Message>, AppError>;

    async fn count_by_chat(&self, chat_id: i64) -> Result<i64, AppError>;
}

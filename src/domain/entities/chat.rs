//! Chat entities and repository trait.
//!
//! Maps to the `chats` and `chat_users` tables. Deleting a chat removes its
//! memberships and messages.

use async_trait::async_trait;
use serde::Serialize;

use super::User;
use crate::shared::error::AppError;

/// A chat room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chat {
    pub id: i64,
    pub title: Option<String>,
}

/// Membership of a user in a chat; `(chat_id, user_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatUser {
    pub id: i64,
    pub chat_id: i64,
    pub user_id: i64,
}

/// Repository trait for Chat data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Create a chat together with its initial members, atomically.
    ///
    /// A repeated member ID fails the whole operation with `Conflict`.
    async fn create(&self, title: Option<String>, member_ids: Vec<i64>) -> Result<Chat, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Chat>, AppError>;

    /// Replace the title of a chat.
    async fn update(&self, id: i64, title: Option<String>) -> Result<Chat, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// List chats ordered by ID.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Chat>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Add a member. Fails with `Conflict` if the user is already a member.
    async fn add_member(&self, chat_id: i64, user_id: i64) -> Result<ChatUser, AppError>;

    /// Members of a chat, ordered by user ID.
    async fn members(&self, chat_id: i64) -> Result<Vec<User>, AppError>;

    /// Member IDs of a chat, ordered.
    async fn member_ids(&self, chat_id: i64) -> Result<Vec<i64>, AppError>;
}

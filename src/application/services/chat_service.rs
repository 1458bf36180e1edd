//! Chat Service
//!
//! Handles chat CRUD and chat membership.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Chat, ChatRepository, ChatUser, User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// One page of chats, ordered by ID.
    async fn list_chats(&self, page: PageRequest) -> Result<Page<ChatDto>, ChatError>;

    /// Create a chat. The creator is always a member.
    async fn create_chat(
        &self,
        creator_id: i64,
        request: CreateChatDto,
    ) -> Result<ChatDto, ChatError>;

    async fn get_chat(&self, chat_id: i64) -> Result<ChatDto, ChatError>;

    async fn update_chat(&self, chat_id: i64, update: UpdateChatDto) -> Result<ChatDto, ChatError>;

    /// Delete a chat along with its messages and memberships.
    async fn delete_chat(&self, chat_id: i64) -> Result<(), ChatError>;

    async fn list_members(&self, chat_id: i64) -> Result<Vec<User>, ChatError>;

    async fn add_member(&self, chat_id: i64, user_id: i64) -> Result<ChatUser, ChatError>;
}

/// Create chat request
#[derive(Debug, Clone, Default)]
pub struct CreateChatDto {
    pub title: Option<String>,
    pub users: Vec<i64>,
}

/// Update chat request. `title: None` leaves the title untouched,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateChatDto {
    pub title: Option<Option<String>>,
}

/// Chat data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatDto {
    pub id: i64,
    pub title: Option<String>,
    pub users: Vec<i64>,
}

impl ChatDto {
    fn new(chat: Chat, users: Vec<i64>) -> Self {
        Self {
            id: chat.id,
            title: chat.title,
            users,
        }
    }
}

/// Chat service errors
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Chat not found")]
    NotFound,

    #[error("Invalid pk \"{0}\" - object does not exist.")]
    UnknownUser(i64),

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::NotFound => AppError::NotFound("Chat not found".into()),
            ChatError::UnknownUser(id) => AppError::invalid_field(
                "users",
                format!("Invalid pk \"{}\" - object does not exist.", id),
            ),
            ChatError::Repository(e) => e,
        }
    }
}

/// ChatService implementation
pub struct ChatServiceImpl<C, U>
where
    C: ChatRepository,
    U: UserRepository,
{
    chat_repo: Arc<C>,
    user_repo: Arc<U>,
}

impl<C, U> ChatServiceImpl<C, U>
where
    C: ChatRepository,
    U: UserRepository,
{
    pub fn new(chat_repo: Arc<C>, user_repo: Arc<U>) -> Self {
        Self {
            chat_repo,
            user_repo,
        }
    }

    async fn find_chat(&self, chat_id: i64) -> Result<Chat, ChatError> {
        self.chat_repo
            .find_by_id(chat_id)
            .await?
            .ok_or(ChatError::NotFound)
    }

    async fn ensure_user(&self, user_id: i64) -> Result<(), ChatError> {
        match self.user_repo.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ChatError::UnknownUser(user_id)),
        }
    }
}

#[async_trait]
impl<C, U> ChatService for ChatServiceImpl<C, U>
where
    C: ChatRepository + 'static,
    U: UserRepository + 'static,
{
    async fn list_chats(&self, page: PageRequest) -> Result<Page<ChatDto>, ChatError> {
        let count = self.chat_repo.count().await?;
        let chats = self.chat_repo.list(page.limit(), page.offset()).await?;

        let mut results = Vec::with_capacity(chats.len());
        for chat in chats {
            let users = self.chat_repo.member_ids(chat.id).await?;
            results.push(ChatDto::new(chat, users));
        }

        Ok(page.into_page(count, results)?)
    }

    async fn create_chat(
        &self,
        creator_id: i64,
        request: CreateChatDto,
    ) -> Result<ChatDto, ChatError> {
        for &user_id in &request.users {
            self.ensure_user(user_id).await?;
        }

        let mut members = request.users;
        if !members.contains(&creator_id) {
            members.push(creator_id);
        }

        let chat = self.chat_repo.create(request.title, members).await?;
        let users = self.chat_repo.member_ids(chat.id).await?;

        tracing::info!(chat_id = chat.id, members = users.len(), "Chat created");
        Ok(ChatDto::new(chat, users))
    }

    async fn get_chat(&self, chat_id: i64) -> Result<ChatDto, ChatError> {
        let chat = self.find_chat(chat_id).await?;
        let users = self.chat_repo.member_ids(chat_id).await?;
        Ok(ChatDto::new(chat, users))
    }

    async fn update_chat(&self, chat_id: i64, update: UpdateChatDto) -> Result<ChatDto, ChatError> {
        let chat = self.find_chat(chat_id).await?;

        let title = match update.title {
            Some(title) => title,
            None => chat.title,
        };

        let chat = self.chat_repo.update(chat_id, title).await?;
        let users = self.chat_repo.member_ids(chat_id).await?;
        Ok(ChatDto::new(chat, users))
    }

    async fn delete_chat(&self, chat_id: i64) -> Result<(), ChatError> {
        self.chat_repo.delete(chat_id).await.map_err(|e| match e {
            AppError::NotFound(_) => ChatError::NotFound,
            e => ChatError::Repository(e),
        })?;

        tracing::info!(chat_id, "Chat deleted");
        Ok(())
    }

    async fn list_members(&self, chat_id: i64) -> Result<Vec<User>, ChatError> {
        self.find_chat(chat_id).await?;
        Ok(self.chat_repo.members(chat_id).await?)
    }

    async fn add_member(&self, chat_id: i64, user_id: i64) -> Result<ChatUser, ChatError> {
        self.find_chat(chat_id).await?;
        self.ensure_user(user_id).await?;

        Ok(self.chat_repo.add_member(chat_id, user_id).await?)
    }
}

//! Chat Repository Implementation
//!
//! SQLite implementation of the ChatRepository trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::user_repository::UserRow;
use crate::domain::{Chat, ChatRepository, ChatUser, User};
use crate::shared::error::AppError;

const DUPLICATE_MEMBER: &str = "The fields chat, user must make a unique set.";

#[derive(Debug, sqlx::FromRow)]
struct ChatRow {
    id: i64,
    title: Option<String>,
}

impl From<ChatRow> for Chat {
    fn from(row: ChatRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ChatUserRow {
    id: i64,
    chat_id: i64,
    user_id: i64,
}

impl From<ChatUserRow> for ChatUser {
    fn from(row: ChatUserRow) -> Self {
        Self {
            id: row.id,
            chat_id: row.chat_id,
            user_id: row.user_id,
        }
    }
}

/// SQLite chat repository implementation.
#[derive(Clone)]
pub struct SqliteChatRepository {
    pool: SqlitePool,
}

impl SqliteChatRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for SqliteChatRepository {
    async fn create(&self, title: Option<String>, member_ids: Vec<i64>) -> Result<Chat, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ChatRow>(
            "INSERT INTO chats (title) VALUES (?1) RETURNING id, title",
        )
        .bind(&title)
        .fetch_one(&mut *tx)
        .await?;

        for user_id in member_ids {
            sqlx::query("INSERT INTO chat_users (chat_id, user_id) VALUES (?1, ?2)")
                .bind(row.id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| AppError::from_constraint(e, DUPLICATE_MEMBER))?;
        }

        tx.commit().await?;

        tracing::debug!(chat_id = row.id, "Chat created");
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Chat>, AppError> {
        let row = sqlx::query_as::<_, ChatRow>("SELECT id, title FROM chats WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Chat::from))
    }

    async fn update(&self, id: i64, title: Option<String>) -> Result<Chat, AppError> {
        let row = sqlx::query_as::<_, ChatRow>(
            "UPDATE chats SET title = ?2 WHERE id = ?1 RETURNING id, title",
        )
        .bind(id)
        .bind(&title)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Chat with id {} not found", id)))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Chat with id {} not found", id)));
        }

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Chat>, AppError> {
        let rows = sqlx::query_as::<_, ChatRow>(
            "SELECT id, title FROM chats ORDER BY id LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Chat::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chats")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn add_member(&self, chat_id: i64, user_id: i64) -> Result<ChatUser, AppError> {
        let row = sqlx::query_as::<_, ChatUserRow>(
            r#"
            INSERT INTO chat_users (chat_id, user_id)
            VALUES (?1, ?2)
            RETURNING id, chat_id, user_id
            "#,
        )
        .bind(chat_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, DUPLICATE_MEMBER))?;

        Ok(row.into())
    }

    async fn members(&self, chat_id: i64) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.date_joined
            FROM chat_users cu
            JOIN users u ON u.id = cu.user_id
            WHERE cu.chat_id = ?1
            ORDER BY u.id
            "#,
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn member_ids(&self, chat_id: i64) -> Result<Vec<i64>, AppError> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT user_id FROM chat_users WHERE chat_id = ?1 ORDER BY user_id",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}

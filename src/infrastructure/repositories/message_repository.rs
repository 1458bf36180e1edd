//! Message Repository Implementation
//!
//! SQLite implementation of the MessageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::{Message, MessageRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: i64,
    create_time: DateTime<Utc>,
    text: String,
    author_id: Option<i64>,
    chat_id: i64,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            create_time: row.create_time,
            text: row.text,
            author_id: row.author_id,
            chat_id: row.chat_id,
        }
    }
}

/// SQLite message repository implementation.
#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    async fn create(
        &self,
        chat_id: i64,
        author_id: Option<i64>,
        text: String,
    ) -> Result<Message, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (create_time, text, author_id, chat_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, create_time, text, author_id, chat_id
            "#,
        )
        .bind(Utc::now())
        .bind(&text)
        .bind(author_id)
        .bind(chat_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, "Message already exists"))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            "SELECT id, create_time, text, author_id, chat_id FROM messages WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Message::from))
    }

    async fn list_by_chat(
        &self,
        chat_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, create_time, text, author_id, chat_id
            FROM messages
            WHERE chat_id = ?1
            ORDER BY create_time, id
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(chat_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn count_by_chat(&self, chat_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages WHERE chat_id = ?1")
            .bind(chat_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

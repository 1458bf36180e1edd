//! Snippet Repository Implementation
//!
//! SQLite implementation of the SnippetRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::{RenderedSnippet, Snippet, SnippetRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct SnippetRow {
    id: i64,
    created: DateTime<Utc>,
    title: String,
    code: String,
    linenos: bool,
    language: String,
    style: String,
    owner_id: i64,
    highlighted: String,
}

impl From<SnippetRow> for Snippet {
    fn from(row: SnippetRow) -> Self {
        Self {
            id: row.id,
            created: row.created,
            title: row.title,
            code: row.code,
            linenos: row.linenos,
            language: row.language,
            style: row.style,
            owner_id: row.owner_id,
            highlighted: row.highlighted,
        }
    }
}

const SNIPPET_COLUMNS: &str =
    "id, created, title, code, linenos, language, style, owner_id, highlighted";

/// SQLite snippet repository implementation.
#[derive(Clone)]
pub struct SqliteSnippetRepository {
    pool: SqlitePool,
}

impl SqliteSnippetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetRepository for SqliteSnippetRepository {
    async fn create(&self, owner_id: i64, snippet: &RenderedSnippet) -> Result<Snippet, AppError> {
        let content = snippet.content();
        let query = format!(
            r#"
            INSERT INTO snippets
                (created, title, code, linenos, language, style, owner_id, highlighted)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING {}
            "#,
            SNIPPET_COLUMNS
        );

        let row = sqlx::query_as::<_, SnippetRow>(&query)
            .bind(Utc::now())
            .bind(&content.title)
            .bind(&content.code)
            .bind(content.linenos)
            .bind(&content.language)
            .bind(&content.style)
            .bind(owner_id)
            .bind(snippet.highlighted())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_constraint(e, "Snippet already exists"))?;

        tracing::debug!(snippet_id = row.id, owner_id, "Snippet created");
        Ok(row.into())
    }

    async fn update(&self, id: i64, snippet: &RenderedSnippet) -> Result<Snippet, AppError> {
        let content = snippet.content();
        let query = format!(
            r#"
            UPDATE snippets
            SET title = ?2,
                code = ?3,
                linenos = ?4,
                language = ?5,
                style = ?6,
                highlighted = ?7
            WHERE id = ?1
            RETURNING {}
            "#,
            SNIPPET_COLUMNS
        );

        let row = sqlx::query_as::<_, SnippetRow>(&query)
            .bind(id)
            .bind(&content.title)
            .bind(&content.code)
            .bind(content.linenos)
            .bind(&content.language)
            .bind(&content.style)
            .bind(snippet.highlighted())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Snippet with id {} not found", id)))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Snippet>, AppError> {
        let query = format!("SELECT {} FROM snippets WHERE id = ?1", SNIPPET_COLUMNS);
        let row = sqlx::query_as::<_, SnippetRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Snippet::from))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Snippet with id {} not found", id)));
        }

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Snippet>, AppError> {
        let query = format!(
            "SELECT {} FROM snippets ORDER BY created, id LIMIT ?1 OFFSET ?2",
            SNIPPET_COLUMNS
        );
        let rows = sqlx::query_as::<_, SnippetRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Snippet::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM snippets")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn ids_by_owner(&self, owner_id: i64) -> Result<Vec<i64>, AppError> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM snippets WHERE owner_id = ?1 ORDER BY created, id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}

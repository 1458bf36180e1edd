//! Snippet entity and repository trait.
//!
//! A snippet stores submitted source code together with an HTML rendering of
//! it. The rendering is derived from the other fields and can only be
//! produced through [`SnippetContent::render`], so a snippet handed to the
//! repository always carries the rendering of its own content.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::services::{HighlightError, SyntaxHighlighter};
use crate::shared::error::AppError;

/// Language used when none is given.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Style used when none is given.
pub const DEFAULT_STYLE: &str = "friendly";

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: u64 = 100;

/// Maps to the `snippets` table:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - created: TEXT NOT NULL, set once on insert
/// - title, code, linenos, language, style: user-editable fields
/// - owner_id: INTEGER NOT NULL REFERENCES users ON DELETE CASCADE
/// - highlighted: TEXT NOT NULL, recomputed on every save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
    pub owner_id: i64,
    pub highlighted: String,
}

impl Snippet {
    /// The user-editable part of this snippet.
    pub fn content(&self) -> SnippetContent {
        SnippetContent {
            title: self.title.clone(),
            code: self.code.clone(),
            linenos: self.linenos,
            language: self.language.clone(),
            style: self.style.clone(),
        }
    }
}

/// User-editable snippet fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetContent {
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
}

impl SnippetContent {
    /// Content with default title, language, style and no line numbers.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            code: code.into(),
            linenos: false,
            language: DEFAULT_LANGUAGE.to_string(),
            style: DEFAULT_STYLE.to_string(),
        }
    }

    /// Render the content, producing a snippet ready to be saved.
    pub fn render(
        self,
        highlighter: &dyn SyntaxHighlighter,
    ) -> Result<RenderedSnippet, HighlightError> {
        let highlighted = highlighter.render(&self)?;
        Ok(RenderedSnippet {
            content: self,
            highlighted,
        })
    }
}

/// Snippet content paired with its rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSnippet {
    content: SnippetContent,
    highlighted: String,
}

impl RenderedSnippet {
    pub fn content(&self) -> &SnippetContent {
        &self.content
    }

    pub fn highlighted(&self) -> &str {
        &self.highlighted
    }
}

/// Repository trait for Snippet data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Insert a snippet owned by `owner_id`, stamping its creation time.
    async fn create(&self, owner_id: i64, snippet: &RenderedSnippet) -> Result<Snippet, AppError>;

    /// Overwrite the editable fields and the rendering of a snippet.
    async fn update(&self, id: i64, snippet: &RenderedSnippet) -> Result<Snippet, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Snippet>, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// List snippets by creation time, oldest first.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Snippet>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// IDs of the snippets owned by a user, oldest first.
    async fn ids_by_owner(&self, owner_id: i64) -> Result<Vec<i64>, AppError>;
}

//! Snippet Service
//!
//! Snippet CRUD. Every save re-renders the highlighted document from the
//! stored fields, so `highlighted` never drifts from the content.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Choice, HighlightError, Snippet, SnippetContent, SnippetRepository, SyntaxHighlighter,
};
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageRequest};

/// Snippet service trait
#[async_trait]
pub trait SnippetService: Send + Sync {
    /// One page of snippets, oldest first.
    async fn list_snippets(&self, page: PageRequest) -> Result<Page<Snippet>, SnippetError>;

    /// Create a snippet owned by `owner_id`.
    async fn create_snippet(
        &self,
        owner_id: i64,
        request: CreateSnippetDto,
    ) -> Result<Snippet, SnippetError>;

    async fn get_snippet(&self, snippet_id: i64) -> Result<Snippet, SnippetError>;

    /// Replace every editable field; omitted optional fields fall back to
    /// their defaults.
    async fn replace_snippet(
        &self,
        actor_id: i64,
        snippet_id: i64,
        request: CreateSnippetDto,
    ) -> Result<Snippet, SnippetError>;

    /// Change only the given fields.
    async fn update_snippet(
        &self,
        actor_id: i64,
        snippet_id: i64,
        update: UpdateSnippetDto,
    ) -> Result<Snippet, SnippetError>;

    async fn delete_snippet(&self, actor_id: i64, snippet_id: i64) -> Result<(), SnippetError>;

    /// The stored HTML document of a snippet.
    async fn highlighted(&self, snippet_id: i64) -> Result<String, SnippetError>;

    /// Selectable languages and styles, in that order.
    fn choices(&self) -> (Vec<Choice>, Vec<Choice>);
}

/// Create or replace request
#[derive(Debug, Clone, Default)]
pub struct CreateSnippetDto {
    pub title: Option<String>,
    pub code: String,
    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

impl CreateSnippetDto {
    fn into_content(self) -> SnippetContent {
        let mut content = SnippetContent::new(self.code);
        if let Some(title) = self.title {
            content.title = title;
        }
        if let Some(linenos) = self.linenos {
            content.linenos = linenos;
        }
        if let Some(language) = self.language {
            content.language = language;
        }
        if let Some(style) = self.style {
            content.style = style;
        }
        content
    }
}

/// Partial update request
#[derive(Debug, Clone, Default)]
pub struct UpdateSnippetDto {
    pub title: Option<String>,
    pub code: Option<String>,
    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

impl UpdateSnippetDto {
    fn apply(self, content: &mut SnippetContent) {
        if let Some(title) = self.title {
            content.title = title;
        }
        if let Some(code) = self.code {
            content.code = code;
        }
        if let Some(linenos) = self.linenos {
            content.linenos = linenos;
        }
        if let Some(language) = self.language {
            content.language = language;
        }
        if let Some(style) = self.style {
            content.style = style;
        }
    }
}

/// Snippet service errors
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    #[error("Snippet not found")]
    NotFound,

    #[error("You do not have permission to perform this action.")]
    Forbidden,

    #[error(transparent)]
    Highlight(#[from] HighlightError),

    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<SnippetError> for AppError {
    fn from(e: SnippetError) -> Self {
        match e {
            SnippetError::NotFound => AppError::NotFound("Snippet not found".into()),
            SnippetError::Forbidden => {
                AppError::Forbidden("You do not have permission to perform this action.".into())
            }
            SnippetError::Highlight(e) => match e {
                HighlightError::UnknownLanguage(_) => {
                    AppError::invalid_field("language", e.to_string())
                }
                HighlightError::UnknownStyle(_) => AppError::invalid_field("style", e.to_string()),
                HighlightError::Render(msg) => AppError::Internal(msg),
            },
            SnippetError::Repository(e) => e,
        }
    }
}

/// SnippetService implementation
pub struct SnippetServiceImpl<S>
where
    S: SnippetRepository,
{
    snippet_repo: Arc<S>,
    highlighter: Arc<dyn SyntaxHighlighter>,
}

impl<S> SnippetServiceImpl<S>
where
    S: SnippetRepository,
{
    pub fn new(snippet_repo: Arc<S>, highlighter: Arc<dyn SyntaxHighlighter>) -> Self {
        Self {
            snippet_repo,
            highlighter,
        }
    }

    async fn find_snippet(&self, snippet_id: i64) -> Result<Snippet, SnippetError> {
        self.snippet_repo
            .find_by_id(snippet_id)
            .await?
            .ok_or(SnippetError::NotFound)
    }

    async fn find_owned(&self, actor_id: i64, snippet_id: i64) -> Result<Snippet, SnippetError> {
        let snippet = self.find_snippet(snippet_id).await?;
        if snippet.owner_id != actor_id {
            return Err(SnippetError::Forbidden);
        }
        Ok(snippet)
    }

    fn check_choices(&self, content: &SnippetContent) -> Result<(), HighlightError> {
        if !self.highlighter.supports_language(&content.language) {
            return Err(HighlightError::UnknownLanguage(content.language.clone()));
        }
        if !self.highlighter.supports_style(&content.style) {
            return Err(HighlightError::UnknownStyle(content.style.clone()));
        }
        Ok(())
    }

    async fn save(
        &self,
        snippet_id: i64,
        content: SnippetContent,
    ) -> Result<Snippet, SnippetError> {
        self.check_choices(&content)?;
        let rendered = content.render(self.highlighter.as_ref())?;
        Ok(self.snippet_repo.update(snippet_id, &rendered).await?)
    }
}

#[async_trait]
impl<S> SnippetService for SnippetServiceImpl<S>
where
    S: SnippetRepository + 'static,
{
    async fn list_snippets(&self, page: PageRequest) -> Result<Page<Snippet>, SnippetError> {
        let count = self.snippet_repo.count().await?;
        let snippets = self.snippet_repo.list(page.limit(), page.offset()).await?;

        Ok(page.into_page(count, snippets)?)
    }

    async fn create_snippet(
        &self,
        owner_id: i64,
        request: CreateSnippetDto,
    ) -> Result<Snippet, SnippetError> {
        let content = request.into_content();
        self.check_choices(&content)?;

        let rendered = content.render(self.highlighter.as_ref())?;
        let snippet = self.snippet_repo.create(owner_id, &rendered).await?;

        tracing::info!(
            snippet_id = snippet.id,
            owner_id,
            language = %snippet.language,
            "Snippet created"
        );
        Ok(snippet)
    }

    async fn get_snippet(&self, snippet_id: i64) -> Result<Snippet, SnippetError> {
        self.find_snippet(snippet_id).await
    }

    async fn replace_snippet(
        &self,
        actor_id: i64,
        snippet_id: i64,
        request: CreateSnippetDto,
    ) -> Result<Snippet, SnippetError> {
        self.find_owned(actor_id, snippet_id).await?;
        self.save(snippet_id, request.into_content()).await
    }

    async fn update_snippet(
        &self,
        actor_id: i64,
        snippet_id: i64,
        update: UpdateSnippetDto,
    ) -> Result<Snippet, SnippetError> {
        let snippet = self.find_owned(actor_id, snippet_id).await?;

        let mut content = snippet.content();
        update.apply(&mut content);
        self.save(snippet_id, content).await
    }

    async fn delete_snippet(&self, actor_id: i64, snippet_id: i64) -> Result<(), SnippetError> {
        self.find_owned(actor_id, snippet_id).await?;
        self.snippet_repo.delete(snippet_id).await?;

        tracing::info!(snippet_id, "Snippet deleted");
        Ok(())
    }

    async fn highlighted(&self, snippet_id: i64) -> Result<String, SnippetError> {
        Ok(self.find_snippet(snippet_id).await?.highlighted)
    }

    fn choices(&self) -> (Vec<Choice>, Vec<Choice>) {
        (
            self.highlighter.language_choices(),
            self.highlighter.style_choices(),
        )
    }
}

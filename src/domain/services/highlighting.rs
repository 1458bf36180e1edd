//! Syntax highlighting contract.

use crate::domain::entities::SnippetContent;

/// Errors raised while rendering snippet content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    #[error("\"{0}\" is not a valid choice.")]
    UnknownLanguage(String),

    #[error("\"{0}\" is not a valid choice.")]
    UnknownStyle(String),

    #[error("Rendering failed: {0}")]
    Render(String),
}

/// A selectable language or style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Value stored on the snippet
    pub key: String,
    /// Human-readable name
    pub name: String,
}

/// Renders snippet content into a standalone HTML document.
///
/// Implementations must reject a language or style they do not list in
/// `supports_language` / `supports_style`.
pub trait SyntaxHighlighter: Send + Sync {
    /// Whether `language` names a known lexer.
    fn supports_language(&self, language: &str) -> bool;

    /// Whether `style` names a known theme.
    fn supports_style(&self, style: &str) -> bool;

    /// Selectable languages, sorted by key.
    fn language_choices(&self) -> Vec<Choice>;

    /// Selectable styles, sorted by key.
    fn style_choices(&self) -> Vec<Choice>;

    /// Render `content.code` for `content.language` under `content.style`,
    /// with a line-number table when `content.linenos` is set and a heading
    /// when `content.title` is non-empty.
    fn render(&self, content: &SnippetContent) -> Result<String, HighlightError>;
}

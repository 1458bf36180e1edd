//! Highlighting Module
//!
//! syntect implementation of the domain `SyntaxHighlighter` and the language
//! and style choice tables it validates against.

mod registry;
mod renderer;

pub use registry::{slugify, ChoiceRegistry, FRIENDLY_STYLE, REGISTRY};
pub use renderer::SyntectHighlighter;

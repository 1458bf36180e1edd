//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool and repositories (SQLite)
//! - Syntax highlighting (syntect)

pub mod database;
pub mod highlighting;
pub mod repositories;

//! # Domain Layer
//!
//! The domain layer contains the persisted entities, the repository traits
//! that give access to them, and the highlighting contract snippets are
//! rendered through.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, Snippet, Chat, Message, etc.)
//! - **services**: Domain services (syntax highlighting contract)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;

//! Repository Implementations
//!
//! SQLite implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - User accounts
//! - **SnippetRepository** - Highlighted code snippets
//! - **ContactRepository** - Contact lists and contact lines
//! - **ChatRepository** - Chats and chat memberships
//! - **MessageRepository** - Chat messages
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::SqlitePool;
//! use crate::infrastructure::repositories::{SqliteChatRepository, SqliteUserRepository};
//!
//! fn setup_repositories(pool: SqlitePool) {
//!     let user_repo = SqliteUserRepository::new(pool.clone());
//!     let chat_repo = SqliteChatRepository::new(pool);
//! }
//! ```

pub mod chat_repository;
pub mod contact_repository;
pub mod message_repository;
pub mod snippet_repository;
pub mod user_repository;

pub use chat_repository::SqliteChatRepository;
pub use contact_repository::SqliteContactRepository;
pub use message_repository::SqliteMessageRepository;
pub use snippet_repository::SqliteSnippetRepository;
pub use user_repository::SqliteUserRepository;

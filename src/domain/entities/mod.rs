//! # Domain Entities
//!
//! Core domain entities representing the persisted objects of the service.
//! All entities map directly to their corresponding database tables.
//!
//! - **User**: account that owns snippets, contacts and chat memberships
//! - **Snippet**: source code with its highlighted HTML rendering
//! - **ContactsList / ContactLine**: a user's list of other users
//! - **Chat / ChatUser**: a chat room and its members
//! - **Message**: a text message posted in a chat
//!
//! Each entity has an associated repository trait defining data access
//! operations, implemented in the infrastructure layer.

mod chat;
mod contact;
mod message;
mod snippet;
mod user;

pub use user::{NewUser, User, UserRepository};

pub use snippet::{
    RenderedSnippet, Snippet, SnippetContent, SnippetRepository, DEFAULT_LANGUAGE, DEFAULT_STYLE,
    MAX_TITLE_LENGTH,
};

pub use contact::{ContactLine, ContactRepository, ContactsList};

pub use chat::{Chat, ChatRepository, ChatUser};

pub use message::{Message, MessageRepository};

#[cfg(test)]
pub use chat::MockChatRepository;
#[cfg(test)]
pub use contact::MockContactRepository;
#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use snippet::MockSnippetRepository;
#[cfg(test)]
pub use user::MockUserRepository;

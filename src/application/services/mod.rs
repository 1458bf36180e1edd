//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Registration, password login, JWT tokens
//! - **UserService**: User listing, detail and account deletion
//! - **ContactService**: Per-user contacts lists
//! - **ChatService**: Chat CRUD and membership
//! - **MessageService**: Chat messages
//! - **SnippetService**: Snippet CRUD and highlighting

pub mod auth_service;
pub mod chat_service;
pub mod contact_service;
pub mod message_service;
pub mod snippet_service;
pub mod user_service;

pub use auth_service::{
    issue_access_token, verify_access_token, AuthError, AuthService, AuthServiceImpl, AuthTokens,
    Claims,
};

pub use user_service::{UserDetails, UserError, UserService, UserServiceImpl};

pub use contact_service::{ContactError, ContactService, ContactServiceImpl};

pub use chat_service::{
    ChatDto, ChatError, ChatService, ChatServiceImpl, CreateChatDto, UpdateChatDto,
};

pub use message_service::{MessageError, MessageService, MessageServiceImpl};

pub use snippet_service::{
    CreateSnippetDto, SnippetError, SnippetService, SnippetServiceImpl, UpdateSnippetDto,
};

//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::{AuthTokens, ChatDto, UserDetails};
use crate::domain::{ChatUser, Choice, ContactLine, Message, Snippet, User};

/// Authentication tokens response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

impl From<AuthTokens> for TokenResponse {
    fn from(tokens: AuthTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            expires_in: tokens.expires_in,
            token_type: tokens.token_type,
        }
    }
}

/// Registration response (includes user and token)
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub token: TokenResponse,
}

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            date_joined: user.date_joined,
        }
    }
}

/// User response with owned snippet IDs
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub snippets: Vec<i64>,
}

impl From<UserDetails> for UserDetailResponse {
    fn from(details: UserDetails) -> Self {
        Self {
            user: details.user.into(),
            snippets: details.snippets,
        }
    }
}

/// Contact line response
#[derive(Debug, Serialize)]
pub struct ContactLineResponse {
    pub id: i64,
    pub contacts_list: i64,
    pub contact: i64,
}

impl From<ContactLine> for ContactLineResponse {
    fn from(line: ContactLine) -> Self {
        Self {
            id: line.id,
            contacts_list: line.contacts_list_id,
            contact: line.contact_id,
        }
    }
}

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub id: i64,
    pub title: Option<String>,
    pub users: Vec<i64>,
}

impl From<ChatDto> for ChatResponse {
    fn from(dto: ChatDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            users: dto.users,
        }
    }
}

/// Chat membership response
#[derive(Debug, Serialize)]
pub struct ChatUserResponse {
    pub id: i64,
    pub chat: i64,
    pub user: i64,
}

impl From<ChatUser> for ChatUserResponse {
    fn from(member: ChatUser) -> Self {
        Self {
            id: member.id,
            chat: member.chat_id,
            user: member.user_id,
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub create_time: DateTime<Utc>,
    pub text: String,
    pub author: Option<i64>,
    pub chat: i64,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            create_time: message.create_time,
            text: message.text,
            author: message.author_id,
            chat: message.chat_id,
        }
    }
}

/// Snippet response. The rendered document is served by the highlight
/// endpoint instead of being inlined.
#[derive(Debug, Serialize)]
pub struct SnippetResponse {
    pub id: i64,
    pub created: DateTime<Utc>,
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
    pub owner: i64,
}

impl From<Snippet> for SnippetResponse {
    fn from(snippet: Snippet) -> Self {
        Self {
            id: snippet.id,
            created: snippet.created,
            title: snippet.title,
            code: snippet.code,
            linenos: snippet.linenos,
            language: snippet.language,
            style: snippet.style,
            owner: snippet.owner_id,
        }
    }
}

/// One selectable language or style
#[derive(Debug, Serialize)]
pub struct ChoiceResponse {
    pub key: String,
    pub name: String,
}

/// Language and style choices
#[derive(Debug, Serialize)]
pub struct ChoicesResponse {
    pub languages: Vec<ChoiceResponse>,
    pub styles: Vec<ChoiceResponse>,
}

impl ChoicesResponse {
    pub fn new(languages: Vec<Choice>, styles: Vec<Choice>) -> Self {
        Self {
            languages: languages.into_iter().map(ChoiceResponse::from).collect(),
            styles: styles.into_iter().map(ChoiceResponse::from).collect(),
        }
    }
}

impl From<Choice> for ChoiceResponse {
    fn from(choice: Choice) -> Self {
        Self {
            key: choice.key,
            name: choice.name,
        }
    }
}

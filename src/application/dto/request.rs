//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::application::services::{
    CreateChatDto, CreateSnippetDto, UpdateChatDto, UpdateSnippetDto,
};

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub username: String,

    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

/// Add contact request
#[derive(Debug, Deserialize, Validate)]
pub struct AddContactRequest {
    pub contact: i64,
}

/// Create snippet request, also used for full replacement
#[derive(Debug, Deserialize, Validate)]
pub struct SnippetRequest {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub code: String,

    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

impl From<SnippetRequest> for CreateSnippetDto {
    fn from(req: SnippetRequest) -> Self {
        Self {
            title: req.title,
            code: req.code,
            linenos: req.linenos,
            language: req.language,
            style: req.style,
        }
    }
}

/// Partial snippet update
#[derive(Debug, Deserialize, Validate)]
pub struct PatchSnippetRequest {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub code: Option<String>,

    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

impl From<PatchSnippetRequest> for UpdateSnippetDto {
    fn from(req: PatchSnippetRequest) -> Self {
        Self {
            title: req.title,
            code: req.code,
            linenos: req.linenos,
            language: req.language,
            style: req.style,
        }
    }
}

/// Create chat request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChatRequest {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub title: Option<String>,

    #[serde(default)]
    pub users: Vec<i64>,
}

impl From<CreateChatRequest> for CreateChatDto {
    fn from(req: CreateChatRequest) -> Self {
        Self {
            title: req.title,
            users: req.users,
        }
    }
}

/// Full chat replacement. A missing title clears it.
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceChatRequest {
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub title: Option<String>,
}

impl From<ReplaceChatRequest> for UpdateChatDto {
    fn from(req: ReplaceChatRequest) -> Self {
        Self {
            title: Some(req.title),
        }
    }
}

/// Partial chat update
#[derive(Debug, Deserialize, Validate)]
pub struct PatchChatRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub title: Option<Option<String>>,
}

impl From<PatchChatRequest> for UpdateChatDto {
    fn from(req: PatchChatRequest) -> Self {
        Self { title: req.title }
    }
}

/// Add chat member request
#[derive(Debug, Deserialize, Validate)]
pub struct AddMemberRequest {
    pub user: i64,
}

/// Send message request
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub text: String,
}

//! Core types: user, chat, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single incoming chat message with user, chat and text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds an incoming text message, stamped now. Used by the CLI to feed typed text into handlers.
    pub fn incoming(id: impl Into<String>, user: User, chat: Chat, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Handler result. `Reply(text)` carries the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop; no response body.
    Stop,
    /// Not for this handler, try next.
    Ignore,
    /// Stop and send reply text.
    Reply(String),
}

/// Single handler concept: optional before / handle / after.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to skip handling.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

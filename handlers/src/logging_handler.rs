//! Logs each incoming message and the reply sent for it.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs in before() and after(); never replies.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => info!(message_id = %message.id, reply = %text, "Replied"),
            other => debug!(message_id = %message.id, response = ?other, "No reply"),
        }
        Ok(())
    }
}

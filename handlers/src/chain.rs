//! Runs handlers for a message: every `before` in order, `handle` until the first Stop or Reply,
//! then every `after` in reverse order with the final response.

use std::sync::Arc;

use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Returns the first Stop or Reply, `Stop` if a `before` declined, or Continue.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            if !handler.before(message).await? {
                info!(
                    handler = %std::any::type_name_of_val(handler.as_ref()),
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let response = handler.handle(message).await?;
            debug!(
                handler = %std::any::type_name_of_val(handler.as_ref()),
                response = ?response,
                "Handler processed"
            );
            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                final_response = response;
                break;
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        info!(message_id = %message.id, "step: handler_chain finished");
        Ok(final_response)
    }
}

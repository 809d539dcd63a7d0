//! # Handlers for dbot
//!
//! Chat-message handlers: the Oxford dictionary command handler, a logging handler, and the
//! [`HandlerChain`] that runs them for each message.

mod chain;
mod dictionary_handler;
mod logging_handler;

#[cfg(test)]
mod test;

pub use chain::HandlerChain;
pub use dictionary_handler::{parse_command, DictionaryHandler, DictionaryMode};
pub use logging_handler::LoggingHandler;

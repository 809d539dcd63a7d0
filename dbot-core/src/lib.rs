//! # dbot-core
//!
//! Core types and traits for the dictionary bot: [`Handler`], chat message and user types,
//! errors, and tracing initialization. Transport-agnostic; used by handlers and dbot-cli.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, User};

//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error for dbot.
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A command was recognised but carried no query text.
    #[error("Empty content")]
    EmptyContent,
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;

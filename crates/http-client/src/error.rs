//! Transport errors returned by [`crate::HttpFetch`].

use thiserror::Error;

/// Request failed before a usable body was received.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Client could not be built (TLS backend, invalid settings).
    #[error("HTTP client build error: {0}")]
    Client(String),

    /// Network failure, DNS, timeout, or body read error.
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },
}

impl HttpError {
    /// Returns the HTTP status when the server answered with a non-2xx code.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Request(e) => e.status().map(|s| s.as_u16()),
            HttpError::Client(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Request(e) if e.is_timeout())
    }
}

use http_client::HttpError;
use thiserror::Error;

/// Lookup failure. The formatter treats both kinds the same; the split exists for logs and callers of `search`.
#[derive(Error, Debug)]
pub enum OxfordError {
    #[error("Oxford API transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("Oxford API decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl OxfordError {
    pub fn kind(&self) -> &'static str {
        match self {
            OxfordError::Transport(_) => "transport",
            OxfordError::Decode(_) => "decode",
        }
    }
}

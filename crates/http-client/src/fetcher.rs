//! [`HttpFetch`] trait and the reqwest-backed [`ReqwestFetcher`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::HttpError;
use crate::request::HttpRequest;

/// Performs a GET for the given request and returns the raw response body.
///
/// Non-2xx responses are errors; the body of a failed response is only carried inside [`HttpError::Status`].
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn fetch(&self, request: &HttpRequest) -> Result<Vec<u8>, HttpError>;
}

/// reqwest implementation of [`HttpFetch`]. Cheap to clone; the connection pool is shared.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Creates a fetcher whose requests fail with a timeout error after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn fetch(&self, request: &HttpRequest) -> Result<Vec<u8>, HttpError> {
        info!(
            url = %request.url,
            headers = ?request.redacted_headers(),
            "step: http GET request"
        );

        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body_len = body.len(), "http GET failed");
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        info!(
            status = status.as_u16(),
            body_len = body.len(),
            "step: http GET done"
        );
        Ok(body.to_vec())
    }
}

//! # http-client
//!
//! Generic request helper used by bot commands: build an [`HttpRequest`] (URL + headers), hand it to an
//! [`HttpFetch`] implementation and get the raw body back, or an [`HttpError`].
//!
//! [`ReqwestFetcher`] is the real implementation. Commands take `Arc<dyn HttpFetch>` so tests can swap in a mock.
//!
//! ## Example
//!
//! ```rust,no_run
//! use http_client::{HttpFetch, HttpRequest, ReqwestFetcher};
//!
//! async fn example() -> Result<(), http_client::HttpError> {
//!     let fetcher = ReqwestFetcher::new(std::time::Duration::from_secs(10))?;
//!     let request = HttpRequest::get("https://example.com/api").header("Accept", "application/json");
//!     let body = fetcher.fetch(&request).await?;
//!     println!("{} bytes", body.len());
//!     Ok(())
//! }
//! ```

mod error;
mod fetcher;
mod request;

pub use error::HttpError;
pub use fetcher::{HttpFetch, ReqwestFetcher};
pub use request::{mask_token, HttpRequest};

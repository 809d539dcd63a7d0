//! # Oxford Dictionary command
//!
//! Looks a word up in the Oxford Dictionaries `entries` API and turns the response into a one-line chat reply:
//! `"<query> - <definition or etymology>"`, or one of two fixed messages when nothing usable comes back.
//!
//! ## Flow
//!
//! 1. [`OxfordDictionaryCommand::search`] percent-encodes the term, GETs `<api_url>/<term>` with
//!    `Accept`, `app_id` and `app_key` headers through an [`http_client::HttpFetch`], and decodes the body
//!    into [`OxfordResult`].
//! 2. [`OxfordDictionaryCommand::execute`] picks the first etymology (etymology mode) or the first definition
//!    and hands exactly one line to the `respond` callback. It never fails: transport and decode errors both
//!    become [`SPELLING_APOLOGY`], an empty result becomes [`NO_RESULTS`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use http_client::ReqwestFetcher;
//! use oxford_dictionary::{EnvOxfordConfig, OxfordConfig, OxfordDictionaryCommand};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let config = EnvOxfordConfig::from_env();
//!     let fetcher = ReqwestFetcher::new(config.timeout())?;
//!     let command = OxfordDictionaryCommand::new(Arc::new(config), Arc::new(fetcher));
//!     command.execute(|reply| println!("{reply}"), "serendipity").await;
//!     Ok(())
//! }
//! ```

mod command;
mod config;
mod error;
mod result;

pub use command::{
    build_url, encode_term, OxfordDictionaryCommand, NO_RESULTS, SPELLING_APOLOGY,
};
pub use config::{EnvOxfordConfig, OxfordConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use error::OxfordError;
pub use result::{Entry, HeadwordEntry, LexicalEntry, OxfordResult, Sense};

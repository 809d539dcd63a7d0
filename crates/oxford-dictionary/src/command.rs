//! Lookup + reply formatting.

use std::sync::Arc;

use http_client::{HttpFetch, HttpRequest};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, info};

use crate::config::OxfordConfig;
use crate::error::OxfordError;
use crate::result::OxfordResult;

/// Reply when nothing usable was found. Also used as the text part when results exist but carry no text.
pub const NO_RESULTS: &str = "Oxford Dict.: no results found.";

/// Reply when the lookup failed (transport or decode).
pub const SPELLING_APOLOGY: &str = "Oxford Dict.: time to upskill that spelling game.";

/// Everything except RFC 3986 unreserved characters is encoded, so the term stays one path segment.
const TERM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a search term for use as a single path segment.
pub fn encode_term(term: &str) -> String {
    utf8_percent_encode(term, TERM_ENCODE_SET).to_string()
}

/// `<api_url>/<encoded term>`. A trailing slash on `api_url` is tolerated.
pub fn build_url(api_url: &str, term: &str) -> String {
    format!("{}/{}", api_url.trim_end_matches('/'), encode_term(term))
}

/// Dictionary command. `etymology` selects word origin over definition when the entry has one.
#[derive(Clone)]
pub struct OxfordDictionaryCommand {
    config: Arc<dyn OxfordConfig>,
    fetcher: Arc<dyn HttpFetch>,
    etymology: bool,
}

impl OxfordDictionaryCommand {
    /// Definition-mode command.
    pub fn new(config: Arc<dyn OxfordConfig>, fetcher: Arc<dyn HttpFetch>) -> Self {
        Self {
            config,
            fetcher,
            etymology: false,
        }
    }

    pub fn with_etymology(mut self, etymology: bool) -> Self {
        self.etymology = etymology;
        self
    }

    /// GET request for `term` with the Accept and credential headers.
    pub fn build_request(&self, term: &str) -> HttpRequest {
        HttpRequest::get(build_url(self.config.api_url(), term))
            .header("Accept", "application/json")
            .header("app_id", self.config.app_id())
            .header("app_key", self.config.app_key())
    }

    /// One GET to the entries endpoint, body decoded into [`OxfordResult`]. No retry.
    pub async fn search(&self, term: &str) -> Result<OxfordResult, OxfordError> {
        let request = self.build_request(term);
        let body = self.fetcher.fetch(&request).await?;
        let result = OxfordResult::from_slice(&body)?;
        Ok(result)
    }

    /// Reply text for a decoded result. Only the first element of each level is read.
    pub fn format_reply(&self, query: &str, result: &OxfordResult) -> String {
        if result.result_count() == 0 {
            return NO_RESULTS.to_string();
        }

        let text = if self.etymology && result.has_etymology_entry() {
            result.first_etymology()
        } else if result.has_definition_entry() {
            result.first_definition()
        } else {
            None
        };
        let text = text.unwrap_or(NO_RESULTS);

        format!("{} - {}", query, text)
    }

    /// Looks `query` up and returns the reply line. Never fails.
    pub async fn reply(&self, query: &str) -> String {
        info!(
            query = %query,
            etymology = self.etymology,
            "step: oxford lookup"
        );

        match self.search(query).await {
            Ok(result) => {
                let reply = self.format_reply(query, &result);
                info!(
                    result_count = result.result_count(),
                    reply_len = reply.len(),
                    "step: oxford lookup done"
                );
                reply
            }
            Err(e) => {
                debug!(kind = e.kind(), error = %e, "oxford lookup failed");
                SPELLING_APOLOGY.to_string()
            }
        }
    }

    /// Looks `query` up and calls `respond` exactly once with the reply line.
    pub async fn execute<F>(&self, respond: F, query: &str)
    where
        F: FnOnce(String) + Send,
    {
        let reply = self.reply(query).await;
        respond(reply);
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

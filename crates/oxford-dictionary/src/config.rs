//! Oxford API configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// `entries` endpoint for English; the encoded term is appended as the last path segment.
pub const DEFAULT_API_URL: &str = "https://od-api.oxforddictionaries.com/api/v1/entries/en";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Credentials and endpoint for the Oxford Dictionaries API.
pub trait OxfordConfig: Send + Sync {
    fn app_id(&self) -> &str;
    fn app_key(&self) -> &str;
    fn api_url(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Oxford config loaded from environment variables.
///
/// Missing credentials are not an error here: they are sent empty and the API rejects the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOxfordConfig {
    /// OXFORD_APP_ID
    pub app_id: String,
    /// OXFORD_APP_KEY
    pub app_key: String,
    /// OXFORD_API_URL
    pub api_url: String,
    /// HTTP_TIMEOUT_SECS
    pub timeout_secs: u64,
}

impl OxfordConfig for EnvOxfordConfig {
    fn app_id(&self) -> &str {
        &self.app_id
    }
    fn app_key(&self) -> &str {
        &self.app_key
    }
    fn api_url(&self) -> &str {
        &self.api_url
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl EnvOxfordConfig {
    /// Config with the given credentials and default endpoint / timeout.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Load from environment variables.
    pub fn from_env() -> Self {
        let app_id = env::var("OXFORD_APP_ID").unwrap_or_default();
        let app_key = env::var("OXFORD_APP_KEY").unwrap_or_default();
        let api_url = env::var("OXFORD_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        if app_id.is_empty() || app_key.is_empty() {
            tracing::warn!("OXFORD_APP_ID / OXFORD_APP_KEY not set; lookups will be rejected by the API");
        }

        Self {
            app_id,
            app_key,
            api_url,
            timeout_secs,
        }
    }

    /// Validate config: api_url must be an http(s) URL, timeout must be non-zero.
    pub fn validate(&self) -> Result<()> {
        match reqwest::Url::parse(&self.api_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => anyhow::bail!("OXFORD_API_URL is not a valid http(s) URL: {}", self.api_url),
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than 0");
        }
        Ok(())
    }
}

//! HTTP client for the upstream anime API
//!
//! Thin wrapper around [`reqwest::Client`] holding the configured API base
//! and source. Requests are issued once; retries and rate limiting are
//! left to the host.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::url::{DEFAULT_BASE_URL, trim_base_url};

const DEFAULT_SOURCE: &str = "zoro";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (default: "https://api.consumet.org")
    pub base_url: String,
    /// Upstream source name used in every endpoint path (default: "zoro")
    pub source: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            timeout_secs: 30,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper bound to one API deployment
///
/// Cheap to share: the inner `reqwest::Client` is reference counted and
/// nothing here is mutated after construction.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
    base_url: String,
    source: String,
}

impl ProviderClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `InvalidUrl` if `base_url` is not an http(s) URL
    /// - `HttpError` if the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = trim_base_url(config.base_url.trim());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ProviderError::InvalidUrl(config.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(ProviderError::HttpError)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            source: config.source,
        })
    }

    /// API base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upstream source name
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Send a GET request to an absolute URL
    ///
    /// The response is returned whatever its status; callers map
    /// non-success statuses to their own error variant.
    ///
    /// # Errors
    /// - `HttpError` - connection, timeout or other transport failure
    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url, "GET");
        self.client
            .get(url)
            .send()
            .await
            .map_err(ProviderError::HttpError)
    }
}

//! HTTP client for the Talk Python To Me website
//!
//! A thin wrapper around `reqwest::Client` that installs the configured
//! default headers and exposes a single page fetch. Each fetch is exactly
//! one attempt; there is no retry or throttling layer.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TalkPythonError};

/// Request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for fetching listing pages
///
/// Every request carries the headers taken from [`Config`] and a fixed
/// timeout.
pub struct TalkPythonClient {
    /// Underlying HTTP client
    client: reqwest::Client,
}

impl TalkPythonClient {
    /// Create a client with the headers from `config` installed as
    /// default headers.
    ///
    /// # Arguments
    /// * `config` - Source of the default request headers
    ///
    /// # Errors
    /// Returns [`TalkPythonError::Configuration`] if a configured header
    /// cannot be represented on the wire or the HTTP client cannot be
    /// built.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(build_header_map(&config.headers)?)
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|err| {
                TalkPythonError::Configuration(format!("cannot build HTTP client: {}", err))
            })?;

        Ok(Self { client })
    }

    /// Fetch one page and return its body.
    ///
    /// # Arguments
    /// * `url` - Absolute URL of the page to fetch
    ///
    /// # Returns
    /// The response body as a string
    ///
    /// # Errors
    /// - [`TalkPythonError::Fetch`] - the request could not be completed
    /// - [`TalkPythonError::FetchStatus`] - the server answered with a
    ///   non-success status code
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(TalkPythonError::FetchStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

/// Convert the configured header strings into a reqwest header map.
fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            TalkPythonError::Configuration(format!("invalid header name `{}`", name))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            TalkPythonError::Configuration(format!("invalid value for header `{}`", name))
        })?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}

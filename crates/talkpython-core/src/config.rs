//! Configuration for the TalkPython scraper
//!
//! Settings are read from the process environment once at startup and the
//! resulting [`Config`] travels by reference from there on. There is no
//! global instance.

use std::collections::HashMap;
use std::env;

use crate::error::{Result, TalkPythonError};

/// User-Agent sent with the episode page request unless overridden
pub const DEFAULT_USER_AGENT: &str = "TalkPython API Client";

/// Runtime configuration for the scraper
///
/// Constructed once at process start, usually via [`Config::from_env`], and
/// passed into the client and the orchestrator. [`Config::new`] builds one
/// directly, which keeps tests independent of the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the site, e.g. `https://talkpython.fm`
    pub base_url: String,
    /// Path of the episode listing, e.g. `/episodes/all`
    pub episodes_path: String,
    /// API key for authentication (carried along, unused by extraction)
    pub api_key: String,
    /// Default outbound request headers
    pub headers: HashMap<String, String>,
}

impl Config {
    /// Create a configuration with the default header set.
    pub fn new(
        base_url: impl Into<String>,
        episodes_path: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            episodes_path: episodes_path.into(),
            api_key: api_key.into(),
            headers: default_headers(),
        }
    }

    /// Load the configuration from the process environment.
    ///
    /// Required variables: `BASE_URL`, `EPISODES_PATH`, `API_KEY`.
    /// Optional: `HEADERS` is a JSON string map that replaces the default
    /// header set, and `USER_AGENT` replaces the `User-Agent` value on top
    /// of that.
    ///
    /// # Errors
    /// Returns [`TalkPythonError::Configuration`] naming the variable when
    /// a required one is absent or not valid unicode, or when `HEADERS`
    /// does not parse as a string map.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(
            require_env("BASE_URL")?,
            require_env("EPISODES_PATH")?,
            require_env("API_KEY")?,
        );

        if let Ok(raw) = env::var("HEADERS") {
            config.headers = parse_headers(&raw)?;
        }

        if let Ok(agent) = env::var("USER_AGENT") {
            config.headers.insert("User-Agent".to_string(), agent);
        }

        Ok(config)
    }

    /// Full URL of the episode listing page.
    ///
    /// Plain concatenation of `base_url` and `episodes_path`. No slash
    /// normalization is applied; the two values must be compatible.
    pub fn page_url(&self) -> String {
        format!("{}{}", self.base_url, self.episodes_path)
    }
}

/// Read one required environment variable.
fn require_env(name: &str) -> Result<String> {
    env::var(name).map_err(|err| match err {
        env::VarError::NotPresent => {
            TalkPythonError::Configuration(format!("{} is not set", name))
        }
        env::VarError::NotUnicode(_) => {
            TalkPythonError::Configuration(format!("{} is not valid unicode", name))
        }
    })
}

/// Header set used when the environment provides no override.
fn default_headers() -> HashMap<String, String> {
    HashMap::from([("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string())])
}

/// Parse the `HEADERS` environment value as a JSON string map.
fn parse_headers(raw: &str) -> Result<HashMap<String, String>> {
    serde_json::from_str(raw).map_err(|err| {
        TalkPythonError::Configuration(format!("HEADERS is not a valid JSON string map: {}", err))
    })
}

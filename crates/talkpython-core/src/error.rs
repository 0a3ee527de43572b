//! Error types for the TalkPython scraper
//!
//! This module defines all error types used throughout the library.
//! None of them are recovered locally: every failure aborts the current
//! run and surfaces to the caller.

use thiserror::Error;

/// Error type for TalkPython scraper operations
#[derive(Error, Debug)]
pub enum TalkPythonError {
    /// Required setting is missing or unusable
    #[error("configuration error: {0}")]
    Configuration(String),

    /// HTTP request failed at the network level
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Server answered with a non-success status code
    #[error("fetch failed: {url} returned HTTP {status}")]
    FetchStatus { url: String, status: u16 },

    /// Row is structurally incompatible with the expected table layout
    #[error("row extraction failed: {0}")]
    Extraction(String),

    /// Field-level type or format failure during record construction
    #[error("invalid value for `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

/// Result type alias for TalkPython scraper operations
pub type Result<T> = std::result::Result<T, TalkPythonError>;

//! Talk Python Scraper Core Library
//!
//! This crate provides the core scraping functionality for the
//! Talk Python To Me episode listing.
//!
//! # Features
//! - Fetch the episode listing page over HTTP
//! - Parse the episode table into typed, validated records
//! - Search the episode list by title, case-insensitively
//! - Configuration from the process environment

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::TalkPythonClient;
pub use config::{Config, DEFAULT_USER_AGENT};
pub use error::{Result, TalkPythonError};
pub use scraper::{search_by_title, TalkPythonScraper};
pub use types::{Episode, RawEpisode};

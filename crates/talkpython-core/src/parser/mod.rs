//! HTML parsers for Talk Python To Me pages
//!
//! This module contains parsers for extracting data from the episode
//! listing HTML:
//! - `episodes`: Parse the episode table page

pub mod episodes;

// Re-export main parsing functions
pub use episodes::{extract_episode_data, parse_episodes};

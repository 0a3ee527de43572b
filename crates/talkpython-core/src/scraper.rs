//! Main Talk Python scraper API
//!
//! This module provides the high-level API for the episode listing.
//! It combines the HTTP client with the table parser to provide a simple
//! interface for fetching the episode list and searching it by title.

use tracing::info;

use crate::client::TalkPythonClient;
use crate::config::Config;
use crate::error::Result;
use crate::parser::parse_episodes;
use crate::types::Episode;

/// Main scraper API for the Talk Python To Me episode listing
///
/// Holds the configuration and the HTTP client built from it. Fetching is
/// asynchronous; searching works on the already fetched list.
///
/// # Example
/// ```no_run
/// use talkpython_core::{Config, TalkPythonScraper};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let scraper = TalkPythonScraper::new(config)?;
///
///     let episodes = scraper.fetch_episodes().await?;
///     println!("Fetched {} episodes", episodes.len());
///
///     Ok(())
/// }
/// ```
pub struct TalkPythonScraper {
    client: TalkPythonClient,
    config: Config,
}

impl TalkPythonScraper {
    /// Create a new scraper from a configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created from the
    /// configured headers.
    ///
    /// # Example
    /// ```
    /// use talkpython_core::{Config, TalkPythonScraper};
    ///
    /// let config = Config::new("https://talkpython.fm", "/episodes/all", "api-key");
    /// let scraper = TalkPythonScraper::new(config).expect("Failed to create scraper");
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        let client = TalkPythonClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Create a new scraper with a pre-built client.
    ///
    /// This is useful for testing or when you need custom client
    /// configuration.
    ///
    /// # Arguments
    /// * `client` - Pre-configured client instance
    /// * `config` - Configuration the scraper should use
    pub fn with_client(client: TalkPythonClient, config: Config) -> Self {
        Self { client, config }
    }

    /// Fetch the listing page and parse every episode from it.
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` with the episodes in page order
    /// * `Err(TalkPythonError)` if the fetch fails or any row is invalid
    ///
    /// # Example
    /// ```no_run
    /// use talkpython_core::{Config, TalkPythonScraper};
    ///
    /// # async fn example() -> Result<(), talkpython_core::TalkPythonError> {
    /// let scraper = TalkPythonScraper::new(Config::from_env()?)?;
    /// let episodes = scraper.fetch_episodes().await?;
    /// for ep in episodes {
    ///     println!("#{}: {}", ep.show_number, ep.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_episodes(&self) -> Result<Vec<Episode>> {
        // Fetch and parse
        let url = self.config.page_url();
        let html = self.client.fetch(&url).await?;
        let episodes = parse_episodes(&html, &self.config.base_url)?;

        info!("parsed {} episodes from {}", episodes.len(), url);
        Ok(episodes)
    }
}

/// Filter episodes whose title contains `term`, case-insensitively.
///
/// Both sides are lowercased before the substring check. The empty term
/// matches every episode, and input order is preserved.
///
/// # Arguments
/// * `episodes` - Episodes to filter
/// * `term` - Substring to look for in the titles
///
/// # Returns
/// * Matching episodes, cloned, in their original order
///
/// # Example
/// ```
/// use talkpython_core::scraper::search_by_title;
/// use talkpython_core::types::{Episode, RawEpisode};
///
/// let raw = RawEpisode {
///     show_number: Some("1".to_string()),
///     date: Some("2025-01-27".to_string()),
///     title: Some("Introduction to Python".to_string()),
///     url: Some("https://example.com/episode/1".to_string()),
///     guest: Some("John Doe".to_string()),
/// };
/// let episodes = vec![Episode::from_raw(raw).unwrap()];
///
/// assert_eq!(search_by_title(&episodes, "PYTHON").len(), 1);
/// assert_eq!(search_by_title(&episodes, "rust").len(), 0);
/// ```
pub fn search_by_title(episodes: &[Episode], term: &str) -> Vec<Episode> {
    let needle = term.to_lowercase();

    episodes
        .iter()
        .filter(|episode| episode.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

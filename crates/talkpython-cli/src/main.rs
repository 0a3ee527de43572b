//! TalkPython scraper main entry point
//!
//! This is the command-line interface for the episode search. It fetches
//! the listing once, prompts for a search term on stdin, and prints the
//! matching episodes.

use std::io::{self, Write};

use talkpython_core::{search_by_title, Config, Episode, TalkPythonScraper};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    // Load and validate configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Configuration loaded, listing at {}", config.page_url());

    let scraper = TalkPythonScraper::new(config)?;
    let episodes = scraper.fetch_episodes().await?;
    println!("Fetched {} episodes.", episodes.len());

    let term = read_search_term()?;
    let results = search_by_title(&episodes, &term);

    println!("{}", render_report(&results, &term));

    Ok(())
}

/// Sets up the tracing subscriber, honoring RUST_LOG when present
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("talkpython=info,talkpython_core=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prompt on stdout and read one line from stdin.
///
/// End of input counts as an empty term, which matches every episode.
fn read_search_term() -> io::Result<String> {
    print!("Enter search term: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(clean_term(&line).to_string())
}

/// Strip the line ending from a raw stdin line, keeping inner whitespace.
fn clean_term(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Render the search results as a human-readable report.
fn render_report(results: &[Episode], term: &str) -> String {
    if results.is_empty() {
        return format!("No episodes match '{}'.", term);
    }

    let mut out = format!("Found {} matching episodes:\n", results.len());
    for episode in results {
        out.push_str(&format!(
            "\n  #{} {} ({})\n",
            episode.show_number, episode.title, episode.date
        ));
        if !episode.guest.is_empty() {
            out.push_str(&format!("      guest: {}\n", episode.guest));
        }
        out.push_str(&format!("      {}\n", episode.url));
    }

    out
}

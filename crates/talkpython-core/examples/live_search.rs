use talkpython_core::{search_by_title, Config, TalkPythonScraper};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use the environment when it is set up, otherwise hit the live site.
    let config = Config::from_env()
        .unwrap_or_else(|_| Config::new("https://talkpython.fm", "/episodes/all", "demo-key"));

    let scraper = TalkPythonScraper::new(config)?;

    println!("🔍 Fetching the episode listing...\n");

    let episodes = scraper.fetch_episodes().await?;

    println!("Fetched {} episodes. Latest:", episodes.len());
    for ep in episodes.iter().take(5) {
        println!("  #{} {} ({})", ep.show_number, ep.title, ep.date);
    }

    let results = search_by_title(&episodes, "python");

    println!("\n🎙 {} episodes with 'python' in the title:\n", results.len());
    for ep in &results {
        let guest = if ep.guest.is_empty() { "—" } else { &ep.guest };
        println!("  #{} {} [{}]", ep.show_number, ep.title, guest);
        println!("      {}", ep.url);
    }

    Ok(())
}

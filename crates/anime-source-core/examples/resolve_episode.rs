//! Debug script: search a title and resolve the streams of its first episode
//!
//! Run with: RUST_LOG=debug cargo run --example resolve_episode -p anime-source-core -- "naruto"

use anime_source_core::{AnimeProvider, SearchOptions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "naruto".to_string());
    let provider = AnimeProvider::new()?;

    println!("Searching for '{}'...\n", query);
    let results = provider.search(&SearchOptions::new(query)).await?;

    let Some(anime) = results.first() else {
        println!("No results found!");
        return Ok(());
    };

    for (i, result) in results.iter().take(5).enumerate() {
        println!("{}. {} [{:?}] ({})", i + 1, result.title, result.sub_or_dub, result.id);
    }

    let episodes = provider.find_episodes(&anime.id).await?;
    println!("\n{} has {} episodes", anime.title, episodes.len());

    let Some(episode) = episodes.first() else {
        return Ok(());
    };

    println!("Resolving episode {} ({})...\n", episode.number, episode.id);
    let server = provider.find_episode_server(episode, "default").await?;

    println!("Server: {}", server.server);
    for source in &server.video_sources {
        println!("  {:>6}  {}", source.quality, source.url);
    }
    if let Some(source) = server.video_sources.first() {
        for subtitle in &source.subtitles {
            let marker = if subtitle.is_default { "*" } else { " " };
            println!("  {} {}  {}", marker, subtitle.language, subtitle.url);
        }
    }

    Ok(())
}

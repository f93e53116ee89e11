//! Anime Source Adapter Core Library
//!
//! Lets a host media catalog search titles, list episodes and resolve
//! playable HLS streams from an upstream anime API.
//!
//! # Overview
//!
//! - Query normalization so season/ordinal spellings search the same way
//! - Search across every upstream result page
//! - Episode listing with watch-endpoint URLs
//! - Episode server resolution: HLS master playlist → per-quality m3u8
//!   sources with shared subtitle tracks
//!
//! # Example
//!
//! ```no_run
//! use anime_source_core::{AnimeProvider, Result, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let provider = AnimeProvider::new()?;
//!
//!     let results = provider.search(&SearchOptions::new("Naruto")).await?;
//!     let Some(anime) = results.first() else {
//!         return Ok(());
//!     };
//!
//!     let episodes = provider.find_episodes(&anime.id).await?;
//!     if let Some(episode) = episodes.first() {
//!         let server = provider.find_episode_server(episode, "default").await?;
//!         for source in &server.video_sources {
//!             println!("{}: {}", source.quality, source.url);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Timeouts
//!
//! Nothing is retried and there is no internal cancellation. Search keeps
//! paging while the upstream reports `hasNextPage`, so hosts should wrap
//! calls in their own timeout.

mod client;
mod error;
pub mod parser;
mod provider;
mod query;
mod types;
pub mod upstream;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, ProviderClient};

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export parser functions
pub use parser::{map_search_results, parse_master_playlist};

// Re-export main provider API
pub use provider::{AnimeProvider, DEFAULT_SERVER, DEFAULT_SERVER_LABEL};

pub use query::normalize_query;

// Re-export data types
pub use types::{
    EpisodeDetails, EpisodeServer, SearchOptions, SearchResult, Settings, SubOrDub, VariantStream,
    VideoSource, VideoSourceType, VideoSubtitle,
};

// Re-export URL helper functions for convenience
pub use url::{build_info_url, build_search_url, build_watch_url, manifest_base_path};

//! Provider facade consumed by the host
//!
//! Combines the HTTP client with the query normalizer and the response
//! parsers behind the four host operations.

use std::collections::HashMap;

use tracing::{debug, info, instrument, warn};

use crate::client::{ClientConfig, ProviderClient};
use crate::error::{ProviderError, Result};
use crate::parser::{
    build_video_sources, map_episodes, map_search_results, map_subtitles, parse_master_playlist,
    select_hls_entry,
};
use crate::query::normalize_query;
use crate::types::{EpisodeDetails, EpisodeServer, SearchOptions, SearchResult, Settings};
use crate::upstream::{AnimeInfo, SearchPage, WatchResponse};
use crate::url::{build_info_url, build_search_url, build_watch_url, manifest_base_path};

/// Server identifier the host passes to get the provider's own label
pub const DEFAULT_SERVER: &str = "default";

/// Label reported for the `default` server
pub const DEFAULT_SERVER_LABEL: &str = "vidcloud";

/// Anime source provider
///
/// Stateless apart from the immutable HTTP client; calls may run
/// concurrently. Every network request is awaited in order and none is
/// retried. Callers should impose their own timeout on `search`, which
/// follows upstream pagination until it reports no next page.
#[derive(Debug, Clone)]
pub struct AnimeProvider {
    client: ProviderClient,
}

impl AnimeProvider {
    /// Create a new provider with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: ProviderClient::new()?,
        })
    }

    /// Create a new provider with custom client configuration
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: ProviderClient::with_config(config)?,
        })
    }

    /// Static capabilities of this provider
    ///
    /// # Example
    /// ```
    /// # fn example() -> anime_source_core::Result<()> {
    /// use anime_source_core::AnimeProvider;
    /// let settings = AnimeProvider::new()?.settings();
    /// assert!(settings.supports_dub);
    /// assert_eq!(settings.episode_servers[0], "default");
    /// # Ok(())
    /// # }
    /// ```
    pub fn settings(&self) -> Settings {
        Settings {
            episode_servers: vec![DEFAULT_SERVER.to_string(), DEFAULT_SERVER_LABEL.to_string()],
            supports_dub: true,
        }
    }

    /// Search for titles, following every upstream page
    ///
    /// The query is normalized first (see [`normalize_query`]). Pages are
    /// requested sequentially from 1 until `hasNextPage` is false and the
    /// results are concatenated in page order.
    ///
    /// # Errors
    /// - `InvalidQuery` if the normalized query is empty
    /// - `SearchFailed` with the page number on a non-success status
    /// - `HttpError` on transport or JSON decoding failure
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> anime_source_core::Result<()> {
    /// use anime_source_core::{AnimeProvider, SearchOptions};
    /// let provider = AnimeProvider::new()?;
    /// let results = provider.search(&SearchOptions::new("Attack on Titan Season 3")).await?;
    /// for result in results {
    ///     println!("{} ({:?})", result.title, result.sub_or_dub);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, options), fields(query = %options.query))]
    pub async fn search(&self, options: &SearchOptions) -> Result<Vec<SearchResult>> {
        let query = normalize_query(&options.query);
        if query.is_empty() {
            return Err(ProviderError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let mut results = Vec::new();
        let mut page = 1;

        loop {
            let url = build_search_url(self.client.base_url(), self.client.source(), &query, page);
            let response = self.client.get(&url).await?;

            let status = response.status();
            if !status.is_success() {
                warn!(page, status = status.as_u16(), "search page request failed");
                return Err(ProviderError::SearchFailed {
                    page,
                    status: status.as_u16(),
                });
            }

            let body: SearchPage = response.json().await?;
            let has_next_page = body.has_next_page;
            debug!(page, count = body.results.len(), has_next_page, "search page fetched");
            results.extend(map_search_results(body.results));

            if !has_next_page {
                break;
            }
            page += 1;
        }

        info!(pages = page, count = results.len(), normalized = %query, "search complete");
        Ok(results)
    }

    /// List every episode of a title
    ///
    /// # Errors
    /// - `InvalidId` if `id` is empty or whitespace only
    /// - `EpisodesFailed` on a non-success status
    /// - `HttpError` on transport or JSON decoding failure
    #[instrument(skip(self))]
    pub async fn find_episodes(&self, id: &str) -> Result<Vec<EpisodeDetails>> {
        if id.trim().is_empty() {
            return Err(ProviderError::InvalidId(
                "Anime ID cannot be empty".to_string(),
            ));
        }

        let url = build_info_url(self.client.base_url(), self.client.source(), id);
        let response = self.client.get(&url).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "info request failed");
            return Err(ProviderError::EpisodesFailed {
                id: id.to_string(),
                status: status.as_u16(),
            });
        }

        let info: AnimeInfo = response.json().await?;
        let episodes = map_episodes(info, self.client.base_url(), self.client.source());
        info!(count = episodes.len(), "episodes listed");
        Ok(episodes)
    }

    /// Resolve the playable sources of an episode
    ///
    /// Fetches the watch metadata, picks the first HLS entry, downloads its
    /// master playlist and returns one m3u8 source per variant, each with
    /// all subtitle tracks attached. `server` is only a label: `"default"`
    /// becomes [`DEFAULT_SERVER_LABEL`], anything else is passed through.
    ///
    /// An unparsable or empty playlist yields an empty source list rather
    /// than an error.
    ///
    /// # Errors
    /// - `InvalidId` if the episode ID is empty or whitespace only
    /// - `WatchFailed` on a non-success watch status
    /// - `NoManifest` if no source is flagged `isM3U8`
    /// - `ManifestFailed` on a non-success playlist status
    /// - `HttpError` on transport or JSON decoding failure
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> anime_source_core::Result<()> {
    /// use anime_source_core::AnimeProvider;
    /// let provider = AnimeProvider::new()?;
    /// let episodes = provider.find_episodes("naruto-677").await?;
    /// if let Some(episode) = episodes.first() {
    ///     let server = provider.find_episode_server(episode, "default").await?;
    ///     for source in server.video_sources {
    ///         println!("{}: {}", source.quality, source.url);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, episode), fields(episode_id = %episode.id))]
    pub async fn find_episode_server(
        &self,
        episode: &EpisodeDetails,
        server: &str,
    ) -> Result<EpisodeServer> {
        if episode.id.trim().is_empty() {
            return Err(ProviderError::InvalidId(
                "Episode ID cannot be empty".to_string(),
            ));
        }

        let server = resolve_server_label(server);

        let watch_url = build_watch_url(self.client.base_url(), self.client.source(), &episode.id);
        let response = self.client.get(&watch_url).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "watch request failed");
            return Err(ProviderError::WatchFailed {
                episode_id: episode.id.clone(),
                status: status.as_u16(),
            });
        }

        let watch: WatchResponse = response.json().await?;
        let entry = select_hls_entry(&watch.sources)
            .ok_or_else(|| ProviderError::NoManifest(episode.id.clone()))?;
        debug!(url = %entry.url, media_type = ?entry.media_type, "selected HLS entry");

        let response = self.client.get(&entry.url).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "manifest request failed");
            return Err(ProviderError::ManifestFailed {
                url: entry.url.clone(),
                status: status.as_u16(),
            });
        }
        let playlist = response.text().await?;

        let base_path = manifest_base_path(&entry.url);
        let variants = parse_master_playlist(&playlist);
        let subtitles = map_subtitles(&episode.id, &watch.subtitles);
        let video_sources = build_video_sources(&base_path, variants, &subtitles);

        info!(
            server = %server,
            variants = video_sources.len(),
            subtitles = subtitles.len(),
            "episode server resolved"
        );

        Ok(EpisodeServer {
            server,
            headers: HashMap::new(),
            video_sources,
        })
    }
}

/// Maps the host's server preference to the reported label
fn resolve_server_label(server: &str) -> String {
    if server == DEFAULT_SERVER {
        DEFAULT_SERVER_LABEL.to_string()
    } else {
        server.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str) -> EpisodeDetails {
        EpisodeDetails {
            id: id.to_string(),
            number: 1,
            url: String::new(),
            title: String::new(),
        }
    }

    #[test]
    fn test_provider_creation() {
        let provider = AnimeProvider::new();
        assert!(provider.is_ok());
    }

    #[test]
    fn test_provider_with_invalid_base() {
        let config = ClientConfig {
            base_url: "not-a-url".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            AnimeProvider::with_config(config),
            Err(ProviderError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_settings() {
        let settings = AnimeProvider::new().unwrap().settings();
        assert_eq!(settings.episode_servers, vec!["default", "vidcloud"]);
        assert!(settings.supports_dub);
    }

    #[test]
    fn test_resolve_server_label() {
        assert_eq!(resolve_server_label("default"), "vidcloud");
        assert_eq!(resolve_server_label("vidstreaming"), "vidstreaming");
        assert_eq!(resolve_server_label("Default"), "Default");
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let provider = AnimeProvider::new().unwrap();
        let result = provider.search(&SearchOptions::new("   ")).await;
        match result {
            Err(ProviderError::InvalidQuery(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidQuery error"),
        }
    }

    #[tokio::test]
    async fn test_find_episodes_empty_id() {
        let provider = AnimeProvider::new().unwrap();
        match provider.find_episodes("").await {
            Err(ProviderError::InvalidId(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidId error"),
        }
    }

    #[tokio::test]
    async fn test_find_episode_server_whitespace_id() {
        let provider = AnimeProvider::new().unwrap();
        let result = provider.find_episode_server(&episode("  "), "default").await;
        assert!(matches!(result, Err(ProviderError::InvalidId(_))));
    }
}

//! URL helper functions for the upstream anime API
//!
//! Provides builders for the search, info and watch endpoints and the
//! base-path computation used to resolve variant playlist URIs.

/// Default upstream API deployment
pub const DEFAULT_BASE_URL: &str = "https://api.consumet.org";

/// Builds the search URL for a query and page number
///
/// URL encodes the query and places it in the path, as the upstream expects.
///
/// # Arguments
/// * `base` - API base URL without trailing slash
/// * `source` - Upstream source name (e.g., "zoro")
/// * `query` - Normalized search query
/// * `page` - 1-based page number
///
/// # Example
/// ```
/// use anime_source_core::url::build_search_url;
/// let url = build_search_url("https://api.example.org", "zoro", "one piece", 2);
/// assert_eq!(url, "https://api.example.org/anime/zoro/one%20piece?page=2");
/// ```
pub fn build_search_url(base: &str, source: &str, query: &str, page: u32) -> String {
    let encoded = urlencoding::encode(query);
    format!("{}/anime/{}/{}?page={}", base, source, encoded, page)
}

/// Builds the info URL listing the episodes of an anime
///
/// # Example
/// ```
/// use anime_source_core::url::build_info_url;
/// let url = build_info_url("https://api.example.org", "zoro", "naruto-677");
/// assert_eq!(url, "https://api.example.org/anime/zoro/info?id=naruto-677");
/// ```
pub fn build_info_url(base: &str, source: &str, id: &str) -> String {
    format!("{}/anime/{}/info?id={}", base, source, urlencoding::encode(id))
}

/// Builds the watch URL returning the sources of an episode
///
/// # Example
/// ```
/// use anime_source_core::url::build_watch_url;
/// let url = build_watch_url("https://api.example.org", "zoro", "naruto-677$episode$12352");
/// assert_eq!(url, "https://api.example.org/anime/zoro/watch/naruto-677%24episode%2412352");
/// ```
pub fn build_watch_url(base: &str, source: &str, id: &str) -> String {
    format!("{}/anime/{}/watch/{}", base, source, urlencoding::encode(id))
}

/// Returns the directory part of a manifest URL, including the final `/`
///
/// Everything after the last `/` is dropped. A string without any `/`
/// yields `"/"`.
///
/// # Example
/// ```
/// use anime_source_core::url::manifest_base_path;
/// assert_eq!(manifest_base_path("https://cdn.example/hls/ep1/master.m3u8"), "https://cdn.example/hls/ep1/");
/// ```
pub fn manifest_base_path(url: &str) -> String {
    match url.rfind('/') {
        Some(idx) => url[..=idx].to_string(),
        None => "/".to_string(),
    }
}

/// Strips trailing slashes from a configured base URL
pub(crate) fn trim_base_url(base: &str) -> &str {
    base.trim_end_matches('/')
}

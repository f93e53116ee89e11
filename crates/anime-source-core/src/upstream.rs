//! Response shapes of the upstream anime API
//!
//! Only the fields the adapter reads are modelled; serde ignores the rest.

use serde::Deserialize;

/// One page of `GET /anime/<source>/<query>?page=<n>`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub results: Vec<SearchItem>,
}

/// A title inside a search page
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// Number of subbed episodes
    #[serde(default)]
    pub sub: u32,
    /// Number of dubbed episodes
    #[serde(default)]
    pub dub: u32,
}

/// Response of `GET /anime/<source>/info?id=<id>`
#[derive(Debug, Clone, Deserialize)]
pub struct AnimeInfo {
    #[serde(default)]
    pub episodes: Vec<InfoEpisode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InfoEpisode {
    pub id: String,
    pub number: u32,
    #[serde(default)]
    pub title: Option<String>,
}

/// Response of `GET /anime/<source>/watch/<id>`
#[derive(Debug, Clone, Deserialize)]
pub struct WatchResponse {
    #[serde(default)]
    pub sources: Vec<ManifestEntry>,
    #[serde(default)]
    pub subtitles: Vec<UpstreamSubtitle>,
}

/// A source descriptor; the HLS master playlist has `isM3U8: true`
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    pub url: String,
    #[serde(rename = "isM3U8", default)]
    pub is_hls: bool,
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSubtitle {
    pub url: String,
    pub lang: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_page() {
        let json = r#"{
            "currentPage": 1,
            "hasNextPage": true,
            "results": [
                {"id": "naruto-677", "title": "Naruto", "url": "https://hianime.to/naruto-677",
                 "image": "https://img/1.jpg", "duration": "23m", "sub": 220, "dub": 220, "episodes": 220},
                {"id": "boruto-8143", "title": "Boruto"}
            ]
        }"#;

        let page: SearchPage = serde_json::from_str(json).expect("Deserialization should succeed");
        assert!(page.has_next_page);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].sub, 220);
        assert_eq!(page.results[1].dub, 0);
        assert_eq!(page.results[1].url, "");
    }

    #[test]
    fn test_deserialize_watch_response() {
        let json = r#"{
            "intro": {"start": 0, "end": 90},
            "outro": {"start": 1300, "end": 1390},
            "sources": [
                {"url": "https://cdn/x/master.m3u8", "isM3U8": true, "type": "hls"},
                {"url": "https://cdn/x/video.mp4"}
            ],
            "subtitles": [{"url": "https://cdn/en.vtt", "lang": "English"}]
        }"#;

        let watch: WatchResponse =
            serde_json::from_str(json).expect("Deserialization should succeed");
        assert_eq!(watch.sources.len(), 2);
        assert!(watch.sources[0].is_hls);
        assert_eq!(watch.sources[0].media_type.as_deref(), Some("hls"));
        assert!(!watch.sources[1].is_hls);
        assert_eq!(watch.subtitles[0].lang, "English");
    }

    #[test]
    fn test_deserialize_info_without_episodes() {
        let info: AnimeInfo =
            serde_json::from_str(r#"{"id": "x", "title": "X"}"#).expect("Deserialization should succeed");
        assert!(info.episodes.is_empty());
    }
}

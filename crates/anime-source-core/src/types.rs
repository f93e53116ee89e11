//! Host-facing data types
//!
//! Every value here is built fresh per call and serialized in camelCase
//! for the host application.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Capabilities declared to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Server identifiers the host may pass to `find_episode_server`
    pub episode_servers: Vec<String>,
    /// Whether dubbed episodes are available
    pub supports_dub: bool,
}

/// Search request from the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Free-text query, normalized before it is sent upstream
    pub query: String,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Audio/caption availability of a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubOrDub {
    Sub,
    Dub,
    Both,
}

impl SubOrDub {
    /// Derives the classification from upstream sub/dub episode counts
    ///
    /// Both counts positive gives `Both`, otherwise a positive dub count
    /// gives `Dub`, and everything else is `Sub`.
    ///
    /// # Example
    /// ```
    /// use anime_source_core::SubOrDub;
    /// assert_eq!(SubOrDub::from_counts(1, 1), SubOrDub::Both);
    /// assert_eq!(SubOrDub::from_counts(0, 0), SubOrDub::Sub);
    /// ```
    pub fn from_counts(sub: u32, dub: u32) -> Self {
        if sub > 0 && dub > 0 {
            Self::Both
        } else if dub > 0 {
            Self::Dub
        } else {
            Self::Sub
        }
    }
}

/// A single title returned by search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Upstream anime ID, used for episode listing
    pub id: String,

    /// Display title
    pub title: String,

    /// Upstream page URL of the title
    pub url: String,

    pub sub_or_dub: SubOrDub,
}

/// A single episode of a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeDetails {
    /// Upstream episode ID, used for server resolution
    pub id: String,

    /// Episode number as reported upstream
    pub number: u32,

    /// Watch endpoint URL for this episode
    pub url: String,

    /// Episode title, empty when upstream has none
    pub title: String,
}

/// Playlist format of a video source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSourceType {
    M3u8,
    Mp4,
}

/// Subtitle track attached to a video source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSubtitle {
    /// `<episodeId>-sub-<index>`
    pub id: String,
    pub url: String,
    pub language: String,
    /// True when the language mentions "english" (any case)
    pub is_default: bool,
}

/// One playable rendition of an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    /// Absolute URL of the variant playlist
    pub url: String,

    #[serde(rename = "type")]
    pub source_type: VideoSourceType,

    /// Quality label such as "720p"
    pub quality: String,

    pub subtitles: Vec<VideoSubtitle>,
}

/// Resolved playable descriptor for an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeServer {
    /// Descriptive server label
    pub server: String,

    /// Extra request headers needed for playback (always empty)
    pub headers: HashMap<String, String>,

    pub video_sources: Vec<VideoSource>,
}

/// A variant stream parsed from an HLS master playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantStream {
    /// Height-based label, e.g. "1080p"
    pub resolution_label: String,

    /// URI exactly as written in the playlist
    pub uri: String,
}

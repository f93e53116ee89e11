//! Error types for the anime source adapter
//!
//! Transport failures carry the endpoint context (page, id or URL) together
//! with the upstream status code. A watch response without any HLS entry is
//! reported separately as [`ProviderError::NoManifest`].

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all provider operations
///
/// Implements Display for human-readable messages and Serialize
/// so a host bridge can forward errors as plain strings.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request or response decoding failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A search page request returned a non-success status
    #[error("Search request for page {page} failed with status {status}")]
    SearchFailed { page: u32, status: u16 },

    /// The info request for an anime returned a non-success status
    #[error("Episode list request for {id} failed with status {status}")]
    EpisodesFailed { id: String, status: u16 },

    /// The watch request for an episode returned a non-success status
    #[error("Watch request for episode {episode_id} failed with status {status}")]
    WatchFailed { episode_id: String, status: u16 },

    /// The master manifest could not be fetched
    #[error("Manifest request {url} failed with status {status}")]
    ManifestFailed { url: String, status: u16 },

    /// The watch response contained no HLS source entry
    #[error("No playable manifest found for episode {0}")]
    NoManifest(String),

    /// Search query is empty after normalization
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Invalid anime or episode ID provided
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ProviderError {
    /// Returns the upstream status code for transport failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SearchFailed { status, .. }
            | Self::EpisodesFailed { status, .. }
            | Self::WatchFailed { status, .. }
            | Self::ManifestFailed { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl Serialize for ProviderError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

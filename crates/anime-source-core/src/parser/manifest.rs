//! HLS master playlist parser
//!
//! Extracts resolution-tagged variant streams from a master playlist.
//! Segment-level playlists, DRM and live tags are not interpreted.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::VariantStream;

/// Tag introducing a variant stream
pub const STREAM_INF_TAG: &str = "#EXT-X-STREAM-INF";

static RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RESOLUTION=(\d+)x(\d+)").expect("valid resolution regex"));

/// Parses a master playlist into variant streams
///
/// A variant is a `#EXT-X-STREAM-INF` line carrying `RESOLUTION=WxH`
/// followed directly by its URI line. Variants without a resolution, or
/// whose next line is missing, blank or another tag, are skipped.
/// Order follows the playlist; nothing is sorted or deduplicated.
///
/// # Arguments
/// * `text` - Raw master playlist text
///
/// # Returns
/// Vector of [`VariantStream`], empty if no usable variant was found
///
/// # Example
/// ```
/// use anime_source_core::parse_master_playlist;
/// let text = "#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360\n360/index.m3u8\n";
/// let variants = parse_master_playlist(text);
/// assert_eq!(variants[0].resolution_label, "360p");
/// assert_eq!(variants[0].uri, "360/index.m3u8");
/// ```
pub fn parse_master_playlist(text: &str) -> Vec<VariantStream> {
    let mut variants = Vec::new();
    let mut lines = text.lines().map(str::trim).peekable();

    while let Some(line) = lines.next() {
        if !line.starts_with(STREAM_INF_TAG) {
            continue;
        }

        let Some(height) = parse_height(line) else {
            debug!(line, "skipping variant without resolution");
            continue;
        };

        // URI must be on the very next line
        match lines.peek() {
            Some(next) if !next.is_empty() && !next.starts_with('#') => {
                variants.push(VariantStream {
                    resolution_label: format!("{}p", height),
                    uri: next.to_string(),
                });
                lines.next();
            }
            _ => debug!(line, "skipping variant without URI line"),
        }
    }

    variants
}

/// Extracts the height from a `RESOLUTION=WxH` attribute
fn parse_height(line: &str) -> Option<u32> {
    let caps = RESOLUTION.captures(line)?;
    caps.get(2)?.as_str().parse().ok()
}

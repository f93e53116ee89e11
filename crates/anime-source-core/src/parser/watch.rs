//! Watch response helpers
//!
//! Selects the HLS master entry of an episode, maps its subtitle tracks
//! and turns parsed variants into playable [`VideoSource`]s.

use crate::types::{VariantStream, VideoSource, VideoSourceType, VideoSubtitle};
use crate::upstream::{ManifestEntry, UpstreamSubtitle};

/// Returns the first source flagged as an HLS playlist
pub fn select_hls_entry(sources: &[ManifestEntry]) -> Option<&ManifestEntry> {
    sources.iter().find(|source| source.is_hls)
}

/// Maps upstream subtitles, keeping their order
///
/// IDs are `<episode_id>-sub-<index>` with a zero-based index into the
/// upstream list. A track is default when its language contains
/// "english" in any case.
pub fn map_subtitles(episode_id: &str, subtitles: &[UpstreamSubtitle]) -> Vec<VideoSubtitle> {
    subtitles
        .iter()
        .enumerate()
        .map(|(index, subtitle)| VideoSubtitle {
            id: format!("{}-sub-{}", episode_id, index),
            url: subtitle.url.clone(),
            language: subtitle.lang.clone(),
            is_default: is_default_language(&subtitle.lang),
        })
        .collect()
}

/// Builds one m3u8 source per variant
///
/// Variant URIs are appended to `base_path` as-is. Every source carries
/// the same subtitle list.
pub fn build_video_sources(
    base_path: &str,
    variants: Vec<VariantStream>,
    subtitles: &[VideoSubtitle],
) -> Vec<VideoSource> {
    variants
        .into_iter()
        .map(|variant| VideoSource {
            url: format!("{}{}", base_path, variant.uri),
            source_type: VideoSourceType::M3u8,
            quality: variant.resolution_label,
            subtitles: subtitles.to_vec(),
        })
        .collect()
}

fn is_default_language(language: &str) -> bool {
    language.to_lowercase().contains("english")
}

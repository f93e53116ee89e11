//! Episode list mapper

use crate::types::EpisodeDetails;
use crate::upstream::AnimeInfo;
use crate::url::build_watch_url;

/// Maps every upstream episode into [`EpisodeDetails`]
///
/// No filtering is applied. Each episode's `url` points at its watch
/// endpoint on the given API base and source.
pub fn map_episodes(info: AnimeInfo, base: &str, source: &str) -> Vec<EpisodeDetails> {
    info.episodes
        .into_iter()
        .map(|episode| EpisodeDetails {
            url: build_watch_url(base, source, &episode.id),
            id: episode.id,
            number: episode.number,
            title: episode.title.unwrap_or_default(),
        })
        .collect()
}

//! Parsers and mappers for upstream responses
//!
//! Everything here is synchronous and free of I/O.

pub mod episodes;
pub mod manifest;
pub mod search;
pub mod watch;

pub use episodes::map_episodes;
pub use manifest::parse_master_playlist;
pub use search::map_search_results;
pub use watch::{build_video_sources, map_subtitles, select_hls_entry};

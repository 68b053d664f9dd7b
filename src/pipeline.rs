//! Song-level analysis: sanitize if needed, attribute, summarize.
//!
//! Each song is parsed independently, so a batch is fanned out with rayon.

use rayon::prelude::*;

use crate::attribution::parse_lyrics;
use crate::report::SongReport;
use crate::sanitize::sanitize_html;
use crate::source::SongText;
use crate::stats::{summarize_album, AlbumSummary};
use crate::types::ParsedLyrics;

/// Attribute one song, sanitizing HTML input first.
///
/// `force_sanitize` runs the sanitizer even for plain-text files.
pub fn analyze(song: &SongText, force_sanitize: bool) -> ParsedLyrics {
    if song.html || force_sanitize {
        parse_lyrics(&sanitize_html(&song.text))
    } else {
        parse_lyrics(&song.text)
    }
}

/// Analyze every song in parallel, keeping input order.
pub fn analyze_all(songs: &[SongText], force_sanitize: bool) -> Vec<SongReport> {
    songs
        .par_iter()
        .map(|song| {
            let parsed = analyze(song, force_sanitize);
            tracing::debug!(
                "{}: {} lines attributed",
                song.title,
                parsed.attributed_lines.len()
            );
            SongReport::new(song.title.clone(), parsed)
        })
        .collect()
}

/// Album roll-up over already analyzed songs.
pub fn album_summary(reports: &[SongReport]) -> AlbumSummary {
    summarize_album(
        reports
            .iter()
            .map(|r| (r.title.as_str(), &r.vocalist_stats)),
    )
}

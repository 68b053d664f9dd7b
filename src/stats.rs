//! Per-vocalist statistics summaries.
//!
//! Turns the raw line/word counts from attribution into totals and
//! percentages, for one song or rolled up across an album.

use serde::Serialize;

use crate::constants::stats::PERCENT_SCALE;
use crate::types::{LineCounts, OrderedMap, VocalistStats};

/// Counts and shares for one vocalist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocalistSummary {
    /// Number of attributed lines.
    pub lines: usize,
    /// Number of words in those lines.
    pub words: usize,
    /// Share of all lines, in percent, one decimal place.
    pub lines_percentage: f64,
    /// Share of all words, in percent, one decimal place.
    pub words_percentage: f64,
}

/// Totals and per-vocalist shares for a set of counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of lines over all vocalists.
    pub total_lines: usize,
    /// Sum of words over all vocalists.
    pub total_words: usize,
    /// Number of distinct vocalists.
    pub vocalist_count: usize,
    /// Per-vocalist counts with percentages, in first-attribution order.
    pub vocalist_stats: OrderedMap<VocalistSummary>,
}

/// Summary for one song within an album.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongSummary {
    /// Song title.
    pub title: String,
    /// That song's own summary.
    pub summary: Summary,
}

/// Album-level roll-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSummary {
    /// Number of songs rolled up.
    pub song_count: usize,
    /// Summary over the merged counts of every song.
    pub summary: Summary,
    /// Per-song summaries in input order.
    pub songs: Vec<SongSummary>,
}

/// `part / total * 100`, rounded to one decimal; zero when `total` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * PERCENT_SCALE).round() / PERCENT_SCALE
}

/// Compute totals and percentages for a set of per-vocalist counts.
pub fn summarize(stats: &VocalistStats) -> Summary {
    let total_lines: usize = stats.values().map(|c| c.lines).sum();
    let total_words: usize = stats.values().map(|c| c.words).sum();

    let vocalist_stats = stats
        .iter()
        .map(|(name, counts)| {
            let summary = VocalistSummary {
                lines: counts.lines,
                words: counts.words,
                lines_percentage: percentage(counts.lines, total_lines),
                words_percentage: percentage(counts.words, total_words),
            };
            (name.to_string(), summary)
        })
        .collect();

    Summary {
        total_lines,
        total_words,
        vocalist_count: stats.len(),
        vocalist_stats,
    }
}

/// Merge counts from several songs by exact vocalist name.
pub fn merge_stats<'a>(songs: impl IntoIterator<Item = &'a VocalistStats>) -> VocalistStats {
    let mut merged = VocalistStats::new();
    for stats in songs {
        for (name, counts) in stats.iter() {
            merged.get_or_default(name).absorb(*counts);
        }
    }
    merged
}

/// Summarize each song and the album as a whole.
pub fn summarize_album<'a>(
    songs: impl IntoIterator<Item = (&'a str, &'a VocalistStats)>,
) -> AlbumSummary {
    let songs: Vec<(&str, &VocalistStats)> = songs.into_iter().collect();
    let merged = merge_stats(songs.iter().map(|(_, stats)| *stats));

    AlbumSummary {
        song_count: songs.len(),
        summary: summarize(&merged),
        songs: songs
            .iter()
            .map(|(title, stats)| SongSummary {
                title: (*title).to_string(),
                summary: summarize(stats),
            })
            .collect(),
    }
}

impl Summary {
    /// Counts for a vocalist without the percentages.
    pub fn counts(&self, name: &str) -> Option<LineCounts> {
        self.vocalist_stats.get(name).map(|s| LineCounts {
            lines: s.lines,
            words: s.words,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;

    fn stats(entries: &[(&str, usize, usize)]) -> VocalistStats {
        entries
            .iter()
            .map(|(name, lines, words)| {
                (name.to_string(), LineCounts { lines: *lines, words: *words })
            })
            .collect()
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 5), 100.0);
    }

    #[test]
    fn test_summarize_totals() {
        let summary = summarize(&stats(&[("Nick", 3, 12), ("Brian", 1, 4)]));
        assert_eq!(summary.total_lines, 4);
        assert_eq!(summary.total_words, 16);
        assert_eq!(summary.vocalist_count, 2);

        let nick = summary.vocalist_stats.get("Nick").unwrap();
        assert_eq!(nick.lines_percentage, 75.0);
        assert_eq!(nick.words_percentage, 75.0);
        assert_eq!(summary.counts("Brian"), Some(LineCounts { lines: 1, words: 4 }));
    }

    #[test]
    fn test_zero_words_gives_zero_percent() {
        let summary = summarize(&stats(&[("All", 2, 0)]));
        let all = summary.vocalist_stats.get("All").unwrap();
        assert_eq!(all.lines_percentage, 100.0);
        assert_eq!(all.words_percentage, 0.0);
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(&VocalistStats::new());
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let summary = summarize(&stats(&[("A", 1, 1), ("B", 1, 1), ("C", 1, 1)]));
        let sum: f64 = summary.vocalist_stats.values().map(|s| s.lines_percentage).sum();
        assert!((sum - 100.0).abs() <= 0.1 * 3.0);
        let lines: usize = summary.vocalist_stats.values().map(|s| s.lines).sum();
        assert_eq!(lines, summary.total_lines);
    }

    #[test]
    fn test_album_rollup_merges_by_name() {
        let first = stats(&[("Nick", 2, 8), ("Brian", 1, 3)]);
        let second = stats(&[("Brian", 3, 9), ("AJ", 1, 1)]);
        let album = summarize_album([("Song One", &first), ("Song Two", &second)]);

        assert_eq!(album.song_count, 2);
        assert_eq!(album.summary.total_lines, 7);
        assert_eq!(
            album.summary.vocalist_stats.keys().collect::<Vec<_>>(),
            vec!["Nick", "Brian", "AJ"]
        );
        assert_eq!(album.summary.counts("Brian"), Some(LineCounts { lines: 4, words: 12 }));
        assert_eq!(album.songs[1].title, "Song Two");
        assert_eq!(album.songs[1].summary.total_words, 10);
    }

    #[test]
    fn test_serialized_field_names() {
        let summary = summarize(&stats(&[("Nick", 1, 2)]));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalLines"], 1);
        assert_eq!(json["vocalistCount"], 1);
        assert_eq!(json["vocalistStats"]["Nick"]["linesPercentage"], 100.0);
    }
}

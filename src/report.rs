//! Report rendering and output.
//!
//! Text reports are column-aligned by display width so names with wide
//! characters still line up.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::config::ReportFormat;
use crate::constants::report::{NAME_HEADER, TOTAL_LABEL};
use crate::error::{Error, Result};
use crate::stats::{summarize, AlbumSummary, Summary};
use crate::types::{AttributedLine, ParsedLyrics, VocalistStats};

/// Everything reported for one song.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongReport {
    /// Song title.
    pub title: String,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Every attributed line in input order.
    pub attributed_lines: Vec<AttributedLine>,
    /// Raw per-vocalist counts.
    pub vocalist_stats: VocalistStats,
    /// Totals and percentages.
    pub summary: Summary,
}

impl SongReport {
    /// Build a report from a parse result.
    pub fn new(title: impl Into<String>, parsed: ParsedLyrics) -> Self {
        let summary = summarize(&parsed.vocalist_stats);
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            attributed_lines: parsed.attributed_lines,
            vocalist_stats: parsed.vocalist_stats,
            summary,
        }
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Render a summary as an aligned table under a title line.
pub fn render_text(title: &str, summary: &Summary) -> String {
    let name_width = summary
        .vocalist_stats
        .keys()
        .chain([NAME_HEADER, TOTAL_LABEL])
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "{}  {:>6}  {:>6}  {:>7}  {:>7}",
        pad_right(NAME_HEADER, name_width),
        "Lines",
        "Words",
        "Lines%",
        "Words%"
    );
    let _ = writeln!(out, "{}", "-".repeat(name_width + 34));

    for (name, s) in summary.vocalist_stats.iter() {
        let _ = writeln!(
            out,
            "{}  {:>6}  {:>6}  {:>7.1}  {:>7.1}",
            pad_right(name, name_width),
            s.lines,
            s.words,
            s.lines_percentage,
            s.words_percentage
        );
    }

    let _ = writeln!(
        out,
        "{}  {:>6}  {:>6}",
        pad_right(TOTAL_LABEL, name_width),
        summary.total_lines,
        summary.total_words
    );
    out
}

/// Render every song table followed by the album totals.
pub fn render_album_text(album_title: &str, album: &AlbumSummary) -> String {
    let mut out = String::new();
    for song in &album.songs {
        out.push_str(&render_text(&song.title, &song.summary));
        out.push('\n');
    }
    out.push_str(&render_text(
        &format!("{album_title} ({} songs)", album.song_count),
        &album.summary,
    ));
    out
}

/// Pretty-printed JSON for any serializable report.
pub fn render_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Lowercase, with runs of non-alphanumerics turned into single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.to_string()
    }
}

/// Write `contents` to `<dir>/<slug>.<ext>`, creating `dir` if needed.
pub fn write_report(dir: &Path, title: &str, format: ReportFormat, contents: &str) -> Result<PathBuf> {
    fs_err::create_dir_all(dir).map_err(|e| Error::io(e, dir.to_path_buf()))?;
    let path = dir.join(format!("{}.{}", slugify(title), format.extension()));
    fs_err::write(&path, contents).map_err(|e| Error::io(e, path.clone()))?;
    tracing::info!("Wrote report to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::attribution::parse_lyrics;

    const SONG: &str = "\
[Verse 1: Nick, <b>Brian</b>]
You are my fire
<b>The one desire</b>
";

    #[test]
    fn test_render_text_rows_in_order() {
        let parsed = parse_lyrics(SONG);
        let text = render_text("I Want It That Way", &summarize(&parsed.vocalist_stats));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "I Want It That Way");
        assert!(lines[1].starts_with("Vocalist"));
        assert!(lines[3].starts_with("Nick "));
        assert!(lines[3].contains("50.0"));
        assert!(lines[4].starts_with("Brian"));
        assert!(lines[5].starts_with("Total"));
    }

    #[test]
    fn test_pad_right_uses_display_width() {
        assert_eq!(pad_right("ＡＪ", 6), "ＡＪ  ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn test_render_json_contract_fields() {
        let report = SongReport::new("Song", parse_lyrics(SONG));
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        assert_eq!(json["attributedLines"][1]["vocalist"], "Brian");
        assert_eq!(json["vocalistStats"]["Nick"]["lines"], 1);
        assert_eq!(json["vocalistStats"]["Brian"]["words"], 3);
        assert_eq!(json["summary"]["totalLines"], 2);
        assert!(json["generatedAt"].is_string());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("I Want It That Way"), "i-want-it-that-way");
        assert_eq!(slugify("  Show Me the Meaning (of Being Lonely)! "), "show-me-the-meaning-of-being-lonely");
        assert_eq!(slugify("???"), "untitled");
    }

    #[test]
    fn test_write_report_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/reports");
        let path = write_report(&out, "Larger than Life", ReportFormat::Json, "{}").unwrap();

        assert_eq!(path, out.join("larger-than-life.json"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }
}

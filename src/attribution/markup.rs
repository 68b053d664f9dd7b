//! Markup helpers shared by the header and line parsers.
//!
//! Input text is expected to contain only the `<b>`/`<i>` whitelist and the
//! `&amp;` entity; anything else is treated as ordinary text.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::attribution::AMP_ENTITY;
use crate::types::Format;

/// Regex matching a section header line like `[Chorus: Nick & Brian]`.
#[allow(clippy::expect_used)]
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.*)\]$").expect("valid regex: RE_HEADER")
});

/// Regex matching any whitelisted open or close marker.
#[allow(clippy::expect_used)]
static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?[bi]\s*>").expect("valid regex: RE_MARKER")
});

/// Regex matching a nested bold-italic opening at the start of a line.
#[allow(clippy::expect_used)]
static RE_LEADING_BOLD_ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:<b>\s*<i>|<i>\s*<b>)").expect("valid regex: RE_LEADING_BOLD_ITALIC")
});

/// Regex matching runs of whitespace.
#[allow(clippy::expect_used)]
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("valid regex: RE_WHITESPACE")
});

/// A single-format markup tag that can stay open across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `<b>`
    Bold,
    /// `<i>`
    Italic,
}

impl Tag {
    /// Opening marker text.
    pub const fn open(self) -> &'static str {
        match self {
            Self::Bold => "<b>",
            Self::Italic => "<i>",
        }
    }

    /// Closing marker text.
    pub const fn close(self) -> &'static str {
        match self {
            Self::Bold => "</b>",
            Self::Italic => "</i>",
        }
    }
}

/// A parsed section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    /// Full text between the brackets.
    pub label: &'a str,
    /// Text after the last colon, if the label has one.
    pub vocalists: Option<&'a str>,
}

/// Recognize a trimmed line as a `[label]` or `[label: vocalists]` header.
pub fn parse_header(line: &str) -> Option<Header<'_>> {
    let caps = RE_HEADER.captures(line)?;
    let label = caps.get(1)?.as_str();
    let vocalists = label.rfind(':').map(|idx| label[idx + 1..].trim());
    Some(Header { label, vocalists })
}

/// Remove every whitelisted marker from `text`.
pub fn strip_markers(text: &str) -> String {
    RE_MARKER.replace_all(text, "").into_owned()
}

/// Count whitespace-separated words after removing markers.
pub fn count_words(text: &str) -> usize {
    strip_markers(text).split_whitespace().count()
}

/// Decode the `&amp;` entity.
pub fn decode_amp(text: &str) -> String {
    text.replace(AMP_ENTITY, "&")
}

/// Collapse whitespace runs into single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Case-insensitive `starts_with` for ASCII prefixes.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Formats to try, most specific first, for the marker a line begins with.
///
/// A nested opening tries bold-italic, then the single format of its outer
/// tag. An unmarked line yields nothing.
pub fn leading_formats(line: &str) -> Vec<Format> {
    let mut formats = Vec::with_capacity(2);
    if RE_LEADING_BOLD_ITALIC.is_match(line) {
        formats.push(Format::BoldItalic);
    }
    if starts_with_ignore_case(line, Tag::Bold.open()) {
        formats.push(Format::Bold);
    } else if starts_with_ignore_case(line, Tag::Italic.open()) {
        formats.push(Format::Italic);
    }
    formats
}

fn count_ignore_case(haystack: &str, needle: &str) -> usize {
    haystack.to_ascii_lowercase().matches(needle).count()
}

/// Whether `line` contains the close marker for `tag`.
pub fn closes(line: &str, tag: Tag) -> bool {
    count_ignore_case(line, tag.close()) > 0
}

/// The tag `line` leaves open at its end, bold checked before italic.
pub fn unclosed_tag(line: &str) -> Option<Tag> {
    [Tag::Bold, Tag::Italic]
        .into_iter()
        .find(|&tag| count_ignore_case(line, tag.open()) > count_ignore_case(line, tag.close()))
}

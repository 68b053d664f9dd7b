//! Per-line vocalist attribution.
//!
//! A [`Section`] holds the active vocalist map and any formatting span left
//! open by an earlier line. [`LyricsParser`] feeds it one line at a time and
//! accumulates the attributed lines and per-vocalist counts.

use super::markup::{self, Header, Tag};
use super::vocalists::parse_vocalist_list;
use crate::constants::attribution::UNKNOWN_VOCALIST;
use crate::types::{AttributedLine, Format, ParsedLyrics, VocalistMap};

/// Whether a formatting span is still open from a previous line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpanState {
    /// No span carried over.
    #[default]
    Closed,
    /// `tag` was opened by an earlier line sung by `vocalist`.
    Open {
        /// The unclosed tag.
        tag: Tag,
        /// Vocalist the opening line was attributed to.
        vocalist: String,
    },
}

/// How a single input line should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trimming.
    Blank,
    /// A `[label]` line, optionally declaring vocalists.
    Header(Header<'a>),
    /// Anything else, trimmed.
    Lyric(&'a str),
}

/// Classify a raw line.
pub fn classify(raw: &str) -> LineKind<'_> {
    let line = raw.trim();
    if line.is_empty() {
        LineKind::Blank
    } else if let Some(header) = markup::parse_header(line) {
        LineKind::Header(header)
    } else {
        LineKind::Lyric(line)
    }
}

/// Attribution state for the section currently being read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    vocalists: VocalistMap,
    span: SpanState,
}

impl Section {
    /// A section with no vocalists; lyric lines are ignored until a header
    /// declares some.
    pub fn new() -> Self {
        Self::default()
    }

    /// A section with a known vocalist map.
    pub const fn with_vocalists(vocalists: VocalistMap) -> Self {
        Self { vocalists, span: SpanState::Closed }
    }

    /// Active vocalist map.
    pub const fn vocalists(&self) -> &VocalistMap {
        &self.vocalists
    }

    /// Carried-over span state.
    pub const fn span(&self) -> &SpanState {
        &self.span
    }

    /// Apply a header line.
    ///
    /// Always closes any open span. Only a header with a colon replaces the
    /// vocalist map; a bare label keeps the previous one.
    pub fn enter_header(&mut self, header: &Header<'_>) {
        self.span = SpanState::Closed;
        if let Some(list) = header.vocalists {
            self.vocalists = parse_vocalist_list(list);
            tracing::debug!(
                "Section [{}] vocalists: {:?}",
                header.label,
                self.vocalists.keys().collect::<Vec<_>>()
            );
        }
    }

    /// Vocalist for unmarked lines: the plain entry, else the first entry.
    pub fn default_vocalist(&self) -> &str {
        self.vocalists
            .find_format(Format::Plain)
            .or_else(|| self.vocalists.first().map(|(name, _)| name))
            .unwrap_or(UNKNOWN_VOCALIST)
    }

    /// Vocalist implied by the marker `line` begins with.
    pub fn vocalist_for(&self, line: &str) -> &str {
        markup::leading_formats(line)
            .into_iter()
            .find_map(|format| self.vocalists.find_format(format))
            .unwrap_or_else(|| self.default_vocalist())
    }

    /// Attribute one trimmed lyric line, updating the span state.
    ///
    /// Returns `None` while no vocalists are declared.
    pub fn attribute(&mut self, line: &str) -> Option<String> {
        if self.vocalists.is_empty() {
            return None;
        }

        if let SpanState::Open { tag, vocalist } = &self.span {
            let vocalist = vocalist.clone();
            if markup::closes(line, *tag) {
                tracing::debug!("Closed {} span for {vocalist}", tag.open());
                self.span = SpanState::Closed;
            }
            return Some(vocalist);
        }

        let vocalist = self.vocalist_for(line).to_string();
        if let Some(tag) = markup::unclosed_tag(line) {
            tracing::debug!("Opened {} span for {vocalist}", tag.open());
            self.span = SpanState::Open { tag, vocalist: vocalist.clone() };
        }
        Some(vocalist)
    }
}

/// Single-pass parser over one lyric text.
#[derive(Debug, Default)]
pub struct LyricsParser {
    section: Section,
    output: ParsedLyrics,
}

impl LyricsParser {
    /// Create a parser with no active section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current section state.
    pub const fn section(&self) -> &Section {
        &self.section
    }

    /// Process one raw input line.
    pub fn feed_line(&mut self, raw: &str) {
        match classify(raw) {
            LineKind::Blank => {}
            LineKind::Header(header) => self.section.enter_header(&header),
            LineKind::Lyric(line) => {
                let Some(vocalist) = self.section.attribute(line) else {
                    return;
                };
                let words = markup::count_words(line);
                self.output.vocalist_stats.get_or_default(&vocalist).record(words);
                self.output.attributed_lines.push(AttributedLine {
                    vocalist,
                    text: line.to_string(),
                });
            }
        }
    }

    /// Consume the parser and return everything attributed so far.
    pub fn finish(self) -> ParsedLyrics {
        self.output
    }
}

/// Attribute every line of `text` to a vocalist.
///
/// Lines before the first vocalist-bearing header are dropped.
pub fn parse_lyrics(text: &str) -> ParsedLyrics {
    let mut parser = LyricsParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

//! Tagged-span extraction from a header's vocalist list.
//!
//! Candidate spans from every pattern family are pooled, sorted by start
//! offset and merged first-wins, so a nested `<b><i>` span claims its range
//! before the outer single-format reading can.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::markup::{collapse_whitespace, decode_amp, strip_markers};
use crate::constants::attribution::AMP_ENTITY;
use crate::types::{Format, VocalistSpec};

/// Pattern families in search order; the order breaks same-start ties.
#[allow(clippy::expect_used)]
static FAMILIES: LazyLock<Vec<(Regex, Format)>> = LazyLock::new(|| {
    [
        (r"(?is)<b>\s*<i>(.*?)</i>\s*</b>", Format::BoldItalic),
        (r"(?is)<i>\s*<b>(.*?)</b>\s*</i>", Format::BoldItalic),
        (r"(?is)<b>(.*?)</b>", Format::Bold),
        (r"(?is)<i>(.*?)</i>", Format::Italic),
    ]
    .into_iter()
    .map(|(pattern, format)| (Regex::new(pattern).expect("valid regex: span family"), format))
    .collect()
});

/// A leading "with", alone or followed by whitespace.
#[allow(clippy::expect_used)]
static RE_LEADING_WITH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^with(?:\s+|$)").expect("valid regex: RE_LEADING_WITH")
});

/// One formatted span found in a vocalist list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSpan {
    /// Byte range of the whole match, markers included.
    pub range: Range<usize>,
    /// Text between the markers.
    pub inner: String,
    /// Format implied by the markers.
    pub format: Format,
}

impl TaggedSpan {
    const fn overlaps(&self, other: &Self) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }

    /// Display name for this span, or `None` if nothing is left after
    /// dropping a leading "with".
    pub fn vocalist_name(&self) -> Option<String> {
        let inner = collapse_whitespace(&strip_markers(&self.inner));
        let name = decode_amp(RE_LEADING_WITH.replace(&inner, "").trim());
        (!name.is_empty()).then_some(name)
    }
}

/// Names found inside spans, plus whatever text was left around them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Tagged vocalists in left-to-right order.
    pub tagged: Vec<VocalistSpec>,
    /// Residual untagged text with spans removed and delimiters trimmed.
    pub residual: String,
}

/// Every candidate span from every family, sorted by start offset.
///
/// Matches within a family never overlap each other; matches across
/// families may.
pub fn find_candidates(list: &str) -> Vec<TaggedSpan> {
    let mut pool: Vec<TaggedSpan> = FAMILIES
        .iter()
        .flat_map(|(re, format)| {
            re.captures_iter(list).filter_map(move |caps| {
                let whole = caps.get(0)?;
                Some(TaggedSpan {
                    range: whole.range(),
                    inner: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                    format: *format,
                })
            })
        })
        .collect();

    // Stable sort keeps family order for equal starts.
    pool.sort_by_key(|span| span.range.start);
    pool
}

/// Keep each candidate only if it does not intersect an already-kept one.
pub fn resolve_overlaps(candidates: Vec<TaggedSpan>) -> Vec<TaggedSpan> {
    let mut kept: Vec<TaggedSpan> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if kept.iter().all(|k| !k.overlaps(&candidate)) {
            kept.push(candidate);
        }
    }
    kept
}

/// Text of `list` outside every kept span.
fn residual_text(list: &str, kept: &[TaggedSpan]) -> String {
    let mut out = String::with_capacity(list.len());
    let mut cursor = 0;
    for span in kept {
        out.push_str(&list[cursor..span.range.start]);
        cursor = span.range.end;
    }
    out.push_str(&list[cursor..]);

    trim_delimiters(&collapse_whitespace(&out)).to_string()
}

/// Strip whitespace, commas, `&` and whole `&amp;` entities from both ends
/// until nothing more comes off.
fn trim_delimiters(mut text: &str) -> &str {
    loop {
        let trimmed = text.trim();
        let trimmed = trimmed
            .strip_prefix(AMP_ENTITY)
            .or_else(|| trimmed.strip_suffix(AMP_ENTITY))
            .or_else(|| trimmed.strip_prefix([',', '&']))
            .or_else(|| trimmed.strip_suffix([',', '&']))
            .unwrap_or(trimmed);
        if trimmed.len() == text.len() {
            return text;
        }
        text = trimmed;
    }
}

/// Pull formatted vocalist names out of a vocalist-list string.
pub fn extract_tagged_vocalists(list: &str) -> Extraction {
    let kept = resolve_overlaps(find_candidates(list));
    let tagged = kept
        .iter()
        .filter_map(|span| {
            span.vocalist_name()
                .map(|name| VocalistSpec::new(name, span.format))
        })
        .collect();

    Extraction {
        tagged,
        residual: residual_text(list, &kept),
    }
}

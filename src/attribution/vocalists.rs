//! Vocalist-list parsing for section headers.
//!
//! `"<b>AJ</b>, Nick &amp; Kevin"` becomes `{AJ: bold, Nick: plain, Kevin: plain}`.
//! Tagged names are inserted first, then the untagged remainder split on
//! `&amp;`, `&`, `with` and `,`.

use std::sync::LazyLock;

use regex::Regex;

use super::markup::{collapse_whitespace, decode_amp};
use super::spans::extract_tagged_vocalists;
use crate::constants::attribution::{AMP_ENTITY, LIST_SEPARATOR};
use crate::types::{Format, VocalistMap, VocalistSpec};

/// Regex matching the connective word "with" between names or at either end.
#[allow(clippy::expect_used)]
static RE_WITH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s+)with(?:\s+|$)").expect("valid regex: RE_WITH")
});

/// Rewrite every delimiter in untagged text to [`LIST_SEPARATOR`].
///
/// Runs of separators collapse to one and separators at either end are
/// dropped.
pub fn normalize_delimiters(text: &str) -> String {
    let sep = LIST_SEPARATOR.to_string();
    let rewritten = text.replace(AMP_ENTITY, &sep).replace('&', &sep);
    let rewritten = RE_WITH.replace_all(&rewritten, sep.as_str()).replace(',', &sep);

    rewritten
        .split(LIST_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .collect::<Vec<_>>()
        .join(&sep)
}

/// Strip one layer of surrounding parentheses, e.g. `(Kevin)`.
fn strip_parens(segment: &str) -> &str {
    segment
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(segment)
}

/// Plain-format names from untagged text, left to right.
pub fn split_untagged(text: &str) -> Vec<VocalistSpec> {
    normalize_delimiters(text)
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| collapse_whitespace(strip_parens(segment)))
        .filter(|name| !name.is_empty())
        .map(|name| VocalistSpec::new(decode_amp(&name), Format::Plain))
        .collect()
}

/// Parse a header's vocalist list into an ordered name → format map.
///
/// A name produced twice keeps its first position and takes the later format.
pub fn parse_vocalist_list(list: &str) -> VocalistMap {
    let mut map = VocalistMap::new();
    if list.trim().is_empty() {
        return map;
    }

    let extraction = extract_tagged_vocalists(list);
    for spec in extraction.tagged {
        map.insert_spec(spec);
    }
    for spec in split_untagged(&extraction.residual) {
        map.insert_spec(spec);
    }
    map
}

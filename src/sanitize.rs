//! Reduce catalog HTML to the markup the attribution parser understands.
//!
//! Only `<b>` and `<i>` survive (with `<strong>`/`<em>` folded into them),
//! line-breaking tags become newlines and everything else is dropped.
//! `&amp;` is left encoded because vocalist lists rely on it.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// HTML comments, possibly multi-line.
#[allow(clippy::expect_used)]
static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex: RE_COMMENT"));

/// Any open, close or self-closing tag; captures the slash and the name.
#[allow(clippy::expect_used)]
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*(/?)\s*([a-z][a-z0-9]*)\b[^>]*>").expect("valid regex: RE_TAG")
});

/// Tags kept as formatting markers, mapped to their canonical name.
static MARKER_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("b", "b");
    m.insert("strong", "b");
    m.insert("i", "i");
    m.insert("em", "i");
    m
});

/// Entities decoded to plain characters. `&amp;` is deliberately absent.
const ENTITIES: &[(&str, &str)] = &[
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&#x27;", "'"),
    ("&apos;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&nbsp;", " "),
];

/// Tags that end a line: `br`, either side of a `p` or `div`, and a closing `li`.
fn breaks_line(name: &str, closing: bool) -> bool {
    matches!(name, "br" | "p" | "div") || (closing && name == "li")
}

fn rewrite_tag(caps: &Captures<'_>) -> String {
    let closing = !caps[1].is_empty();
    let name = caps[2].to_ascii_lowercase();

    if let Some(marker) = MARKER_ALIASES.get(name.as_str()) {
        return if closing {
            format!("</{marker}>")
        } else {
            format!("<{marker}>")
        };
    }
    if breaks_line(&name, closing) {
        return "\n".to_string();
    }
    String::new()
}

/// Convert raw lyric HTML into text with only the marker whitelist left.
pub fn sanitize_html(raw: &str) -> String {
    let without_comments = RE_COMMENT.replace_all(raw, "");
    let mut text = RE_TAG.replace_all(&without_comments, rewrite_tag).into_owned();

    for (entity, plain) in ENTITIES {
        text = text.replace(entity, plain);
    }

    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_matches('\n')
        .to_string()
}

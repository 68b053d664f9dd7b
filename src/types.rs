//! Core data model for vocalist attribution.
//!
//! Everything here is created fresh per lyric text and discarded once the
//! attributed lines and counts have been produced.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Formatting applied to a vocalist name in a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// No surrounding markup.
    #[default]
    Plain,
    /// Wrapped in `<b>`.
    Bold,
    /// Wrapped in `<i>`.
    Italic,
    /// Wrapped in nested `<b><i>` or `<i><b>`.
    BoldItalic,
}

impl Format {
    /// Returns the lowercase name used in reports and JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold-italic",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A vocalist name together with the markup it was declared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocalistSpec {
    /// Decoded, trimmed display name (may be a duo such as `AJ & Brian`).
    pub name: String,
    /// Markup the name was wrapped in.
    pub format: Format,
}

impl VocalistSpec {
    /// Create a new spec.
    pub fn new(name: impl Into<String>, format: Format) -> Self {
        Self { name: name.into(), format }
    }
}

/// Insertion-ordered string-keyed map.
///
/// Re-inserting an existing key overwrites its value in place and keeps the
/// key's original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedMap<V> {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Insert or overwrite, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Look up a value by exact key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    /// Mutable access to the value for `key`, inserting a default first if absent.
    pub fn get_or_default(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        let idx = self.position(key).unwrap_or_else(|| {
            self.entries.push((key.to_string(), V::default()));
            self.entries.len() - 1
        });
        &mut self.entries[idx].1
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// First entry in insertion order.
    pub fn first(&self) -> Option<(&str, &V)> {
        self.entries.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Vocalists declared by a section header, name to format.
pub type VocalistMap = OrderedMap<Format>;

impl OrderedMap<Format> {
    /// Insert a spec, overwriting the format of an existing name.
    pub fn insert_spec(&mut self, spec: VocalistSpec) {
        self.insert(spec.name, spec.format);
    }

    /// First vocalist (in insertion order) declared with `format`.
    pub fn find_format(&self, format: Format) -> Option<&str> {
        self.iter().find(|(_, f)| **f == format).map(|(name, _)| name)
    }
}

/// One lyric line and the vocalist it was attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributedLine {
    /// Attributed vocalist name.
    pub vocalist: String,
    /// Trimmed original line, markup included.
    pub text: String,
}

/// Line and word totals for one vocalist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineCounts {
    /// Number of attributed lines.
    pub lines: usize,
    /// Number of words across those lines, markup excluded.
    pub words: usize,
}

impl LineCounts {
    /// Add one line of `words` words.
    pub const fn record(&mut self, words: usize) {
        self.lines += 1;
        self.words += words;
    }

    /// Add another set of counts into this one.
    pub const fn absorb(&mut self, other: Self) {
        self.lines += other.lines;
        self.words += other.words;
    }
}

/// Per-vocalist counts in first-attribution order.
pub type VocalistStats = OrderedMap<LineCounts>;

/// Result of attributing one lyric text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLyrics {
    /// Every attributed line in input order.
    pub attributed_lines: Vec<AttributedLine>,
    /// Counts per vocalist.
    pub vocalist_stats: VocalistStats,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut map = VocalistMap::new();
        map.insert("Nick", Format::Plain);
        map.insert("Brian", Format::Bold);
        let prev = map.insert("Nick", Format::Italic);

        assert_eq!(prev, Some(Format::Plain));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Nick", "Brian"]);
        assert_eq!(map.get("Nick"), Some(&Format::Italic));
    }

    #[test]
    fn test_find_format_returns_first_match() {
        let map: VocalistMap = [
            ("AJ".to_string(), Format::Bold),
            ("Kevin".to_string(), Format::Plain),
            ("Howie".to_string(), Format::Plain),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.find_format(Format::Plain), Some("Kevin"));
        assert_eq!(map.find_format(Format::Italic), None);
    }

    #[test]
    fn test_get_or_default_appends() {
        let mut stats = VocalistStats::new();
        stats.get_or_default("Nick").record(4);
        stats.get_or_default("Brian").record(2);
        stats.get_or_default("Nick").record(3);

        assert_eq!(stats.get("Nick"), Some(&LineCounts { lines: 2, words: 7 }));
        assert_eq!(stats.first().map(|(k, _)| k), Some("Nick"));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut map = VocalistMap::new();
        map.insert("Zed", Format::BoldItalic);
        map.insert("Amy", Format::Plain);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Zed":"bold-italic","Amy":"plain"}"#);
    }
}

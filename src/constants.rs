//! Application constants.
//!
//! Centralizes marker literals and fallback labels used across the parser.

/// Vocalist attribution constants.
pub mod attribution {
    /// Label used when no vocalist in the active map can be chosen.
    pub const UNKNOWN_VOCALIST: &str = "Unknown";

    /// Canonical separator used while splitting untagged vocalist lists.
    ///
    /// ASCII unit separator; never appears in lyric text.
    pub const LIST_SEPARATOR: char = '\u{1f}';

    /// HTML-encoded ampersand as it appears in catalog text.
    pub const AMP_ENTITY: &str = "&amp;";
}

/// Statistics constants.
pub mod stats {
    /// Percentages are rounded to this many tenths.
    pub const PERCENT_SCALE: f64 = 10.0;
}

/// Report output constants.
pub mod report {
    /// Directory created under the platform data dir for reports.
    pub const APP_DIR: &str = "vocalsplit";

    /// Subdirectory for rendered reports.
    pub const REPORTS_DIR: &str = "reports";

    /// Header for the name column of the text table.
    pub const NAME_HEADER: &str = "Vocalist";

    /// Label for the totals row of the text table.
    pub const TOTAL_LABEL: &str = "Total";
}

/// Lyric source constants.
pub mod source {
    /// File extensions picked up when scanning a directory.
    pub const LYRIC_EXTENSIONS: &[&str] = &["txt", "html", "htm"];
}

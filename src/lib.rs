//! `vocalsplit` - attribute song lyric lines to vocalists.
//!
//! Section headers such as `[Chorus: Nick, <b>Brian</b>]` declare who sings
//! a section; the bold/italic marker a line starts with picks the singer for
//! that line. Attributed lines are rolled up into per-vocalist line and word
//! shares.

// Re-export public modules for use in integration tests and as a library
pub mod attribution;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod sanitize;
pub mod source;
pub mod stats;
pub mod types;

pub use attribution::{extract_tagged_vocalists, parse_lyrics, parse_vocalist_list};
pub use stats::{summarize, summarize_album, Summary};
pub use types::{AttributedLine, Format, LineCounts, ParsedLyrics, VocalistMap, VocalistStats};

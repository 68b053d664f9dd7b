//! Vocalist attribution for lyric text.
//!
//! Section headers such as `[Chorus: Nick, <b>Brian</b>]` declare who sings,
//! and the bold/italic marker a lyric line begins with picks the singer for
//! that line.

/// Per-line attribution state machine
pub mod engine;
/// Marker and header helpers
pub mod markup;
/// Formatted-span extraction from vocalist lists
pub mod spans;
/// Vocalist-list parsing
pub mod vocalists;

pub use engine::{parse_lyrics, LyricsParser, Section, SpanState};
pub use spans::{extract_tagged_vocalists, Extraction};
pub use vocalists::parse_vocalist_list;

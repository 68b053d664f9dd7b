//! Dump per-line vocalist attribution for one lyric file.
//!
//! Usage: cargo run --bin dump_sections -- <FILE> [--sanitize]

// Development/debug binary - allow expect/unwrap for simpler error handling
#![allow(clippy::expect_used, clippy::unwrap_used)]

use vocalsplit::attribution::engine::{classify, LineKind, LyricsParser};
use vocalsplit::sanitize::sanitize_html;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        eprintln!("Usage: dump_sections <FILE> [--sanitize]");
        std::process::exit(2);
    };
    let sanitize = args.iter().any(|a| a == "--sanitize") || path.ends_with(".html");

    let raw = fs_err::read_to_string(path).expect("Failed to read lyrics file");
    let text = if sanitize { sanitize_html(&raw) } else { raw };

    let mut parser = LyricsParser::new();
    for line in text.lines() {
        match classify(line) {
            LineKind::Header(header) => {
                parser.feed_line(line);
                let vocalists: Vec<String> = parser
                    .section()
                    .vocalists()
                    .iter()
                    .map(|(name, format)| format!("{name} ({format})"))
                    .collect();
                println!("=== [{}] -> {}", header.label, vocalists.join(", "));
            }
            LineKind::Lyric(lyric) => {
                let before = parser.section().vocalists().is_empty();
                parser.feed_line(line);
                if before {
                    println!("  {:<16} | {lyric}", "(dropped)");
                }
            }
            LineKind::Blank => {}
        }
    }

    let parsed = parser.finish();
    println!();
    for attributed in &parsed.attributed_lines {
        println!("{:<16} | {}", attributed.vocalist, attributed.text);
    }
    println!();
    for (name, counts) in parsed.vocalist_stats.iter() {
        println!("{name}: {} lines, {} words", counts.lines, counts.words);
    }
}

//! End-to-end attribution tests over whole lyric texts.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::float_cmp,
    clippy::cast_precision_loss
)]

use vocalsplit::{parse_lyrics, parse_vocalist_list, summarize, Format, LineCounts};

const SONG: &str = "\
Some credits line that no one sings

[Intro: <b>Brian</b>, Nick]
<b>Yeah, yeah</b>

[Verse 1: Nick, <b>Brian</b>, <i>AJ &amp; Kevin</i>, <b><i>Howie</i></b>]
You are my fire
<b>The one desire
Believe when I say
I want it that way</b>
<i>But we are two worlds apart</i>
<b><i>Can't reach to your heart</i></b>

[Pre-Chorus]
<i>When you say</i>

[Chorus: All]
Tell me why
";

#[test]
fn full_song_attribution() {
    let parsed = parse_lyrics(SONG);
    let singers: Vec<&str> = parsed
        .attributed_lines
        .iter()
        .map(|l| l.vocalist.as_str())
        .collect();

    assert_eq!(
        singers,
        vec![
            "Brian", "Nick", "Brian", "Brian", "Brian", "AJ & Kevin", "Howie", "AJ & Kevin", "All",
        ]
    );
    assert_eq!(parsed.attributed_lines[2].text, "<b>The one desire");
}

#[test]
fn multi_line_bold_span_counts_every_line() {
    let text = "[Verse: Nick, <b>Brian</b>]\n<b>First line\nSecond line\nThird line</b>\nNick again\n";
    let parsed = parse_lyrics(text);

    assert_eq!(
        parsed.vocalist_stats.get("Brian"),
        Some(&LineCounts { lines: 3, words: 6 })
    );
    assert_eq!(parsed.vocalist_stats.get("Nick").map(|c| c.lines), Some(1));
}

#[test]
fn header_without_colon_keeps_previous_vocalists() {
    let text = "[Verse 1: <i>Kevin</i>, Howie]\nfirst\n[Chorus]\n<i>second</i>\nthird\n";
    let parsed = parse_lyrics(text);
    let singers: Vec<&str> = parsed.attributed_lines.iter().map(|l| l.vocalist.as_str()).collect();
    assert_eq!(singers, vec!["Howie", "Kevin", "Howie"]);
}

#[test]
fn header_closes_open_span() {
    let text = "[Verse: Nick, <b>Brian</b>]\n<b>left open\n[Verse 2]\nplain line\n";
    let parsed = parse_lyrics(text);
    assert_eq!(parsed.attributed_lines[1].vocalist, "Nick");
}

#[test]
fn word_count_ignores_wrapping_tag() {
    let bold = parse_lyrics("[V: Nick]\n<b>This is five words</b>\n");
    let plain = parse_lyrics("[V: Nick]\nThis is five words\n");
    assert_eq!(bold.vocalist_stats.get("Nick").unwrap().words, 4);
    assert_eq!(plain.vocalist_stats.get("Nick").unwrap().words, 4);
}

#[test]
fn documented_vocalist_lists() {
    let cases: &[(&str, &[(&str, Format)])] = &[
        ("Nick Carter", &[("Nick Carter", Format::Plain)]),
        ("<b>Brian Littrell</b>", &[("Brian Littrell", Format::Bold)]),
        ("<b><i>Howie Dorough</i></b>", &[("Howie Dorough", Format::BoldItalic)]),
        ("<i><b>Howie Dorough</b></i>", &[("Howie Dorough", Format::BoldItalic)]),
        ("AJ, <i>AJ & Brian</i>", &[("AJ & Brian", Format::Italic), ("AJ", Format::Plain)]),
        ("Nick <i>with Brian</i>", &[("Brian", Format::Italic), ("Nick", Format::Plain)]),
    ];

    for (list, expected) in cases {
        let map = parse_vocalist_list(list);
        let got: Vec<(&str, Format)> = map.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(&got, expected, "vocalist list {list:?}");
    }
}

#[test]
fn single_span_lists_yield_one_entry() {
    for (list, format) in [
        ("<b>Kevin Richardson</b>", Format::Bold),
        ("<i>A.J. McLean</i>", Format::Italic),
        ("<i> <b>Nick &amp; Howie</b> </i>", Format::BoldItalic),
    ] {
        let map = parse_vocalist_list(list);
        assert_eq!(map.len(), 1, "{list}");
        assert_eq!(map.values().next(), Some(&format));
    }
}

#[test]
fn summary_totals_match_per_vocalist_counts() {
    let summary = summarize(&parse_lyrics(SONG).vocalist_stats);
    let lines: usize = summary.vocalist_stats.values().map(|s| s.lines).sum();
    let pct: f64 = summary.vocalist_stats.values().map(|s| s.lines_percentage).sum();

    assert_eq!(lines, summary.total_lines);
    assert_eq!(summary.vocalist_count, 5);
    assert!((pct - 100.0).abs() <= 0.1 * summary.vocalist_count as f64);
}

#[test]
fn degenerate_inputs_yield_empty_results() {
    for text in ["", "\n\n", "no headers here\nat all", "[Verse]\nlabel only", "[Verse:]\nempty list"] {
        let parsed = parse_lyrics(text);
        assert!(parsed.attributed_lines.is_empty(), "{text:?}");
        let summary = summarize(&parsed.vocalist_stats);
        assert_eq!(summary.total_lines, 0);
        assert_eq!(summary.total_words, 0);
        assert!(summary.vocalist_stats.is_empty());
    }
}

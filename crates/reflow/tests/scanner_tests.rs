//! Classification tests for the span scanner.

use reflow::{scan, Scanner, SpanKind};

fn kinds(input: &str) -> Vec<SpanKind> {
    scan(input).iter().map(|s| s.kind).collect()
}

fn texts(input: &str) -> Vec<&str> {
    scan(input).iter().map(|s| s.text).collect()
}

// ============================================================================
// Partition invariant
// ============================================================================

#[test]
fn spans_partition_arbitrary_input() {
    let samples = [
        "",
        "words only here",
        "<info>styled</info> trailing",
        "half <open and a stray > angle",
        "scheme https://example.com/path?q=1#frag done",
        "tab\tand\u{a0}odd blanks",
        "unix\nwindows\r\nlone\rcarriage",
        "<fg=green;options=bold>deep</> <override>",
    ];
    for sample in samples {
        let spans = scan(sample);
        let rebuilt: String = spans.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, sample, "partition broken for {sample:?}");

        let mut offset = 0;
        for span in &spans {
            assert_eq!(span.start, offset, "gap or overlap in {sample:?}");
            assert!(!span.is_empty(), "empty span in {sample:?}");
            offset = span.end();
        }
        assert_eq!(offset, sample.len());
    }
}

// ============================================================================
// Tag grammar
// ============================================================================

#[test]
fn named_pairs_are_tags() {
    assert_eq!(
        kinds("<comment>aside</comment>"),
        vec![SpanKind::Tag, SpanKind::Word, SpanKind::Tag]
    );
}

#[test]
fn bare_close_tag_is_accepted() {
    let spans = scan("<info>x</>");
    assert_eq!(spans[2].kind, SpanKind::Tag);
    assert_eq!(spans[2].text, "</>");
}

#[test]
fn attributes_are_opaque() {
    let spans = scan("<fg=cyan;bg=black;href=x>y</>");
    assert_eq!(spans[0].kind, SpanKind::Tag);
    assert_eq!(spans[0].text, "<fg=cyan;bg=black;href=x>");
}

#[test]
fn rejected_angles_stay_plain() {
    // No name, digit name, unterminated, spanning a line break.
    for input in ["<>", "<2x>", "<open", "<a\nb>"] {
        assert!(
            scan(input).iter().all(|s| s.kind != SpanKind::Tag),
            "unexpected tag in {input:?}"
        );
    }
}

#[test]
fn stray_close_angle_is_plain() {
    assert_eq!(
        kinds("a > b"),
        vec![
            SpanKind::Word,
            SpanKind::Space,
            SpanKind::Word,
            SpanKind::Space,
            SpanKind::Word,
        ]
    );
}

// ============================================================================
// URL recognition
// ============================================================================

#[test]
fn schemes_are_letter_runs() {
    for input in ["https://a.io", "ftp://host", "myapp://deep/link", "HTTPS://A.IO"] {
        let spans = scan(input);
        assert_eq!(spans.len(), 1, "{input:?}");
        assert_eq!(spans[0].kind, SpanKind::Url);
    }
}

#[test]
fn url_swallows_query_and_fragment() {
    let spans = scan("see https://h.io/p?q=0&r=1#top ok");
    assert_eq!(spans[2].kind, SpanKind::Url);
    assert_eq!(spans[2].text, "https://h.io/p?q=0&r=1#top");
}

#[test]
fn url_stops_at_a_tag() {
    assert_eq!(
        texts("<href>https://a.io</href>"),
        vec!["<href>", "https://a.io", "</href>"]
    );
}

#[test]
fn missing_scheme_is_plain_text() {
    for input in ["://nowhere", "example.com/path", "a//b"] {
        assert!(
            scan(input).iter().all(|s| s.kind != SpanKind::Url),
            "unexpected url in {input:?}"
        );
    }
}

#[test]
fn url_found_mid_word_keeps_the_prefix() {
    assert_eq!(texts("(https://a.io)"), vec!["(", "https://a.io)"]);
    assert_eq!(
        kinds("(https://a.io)"),
        vec![SpanKind::Word, SpanKind::Url]
    );
}

// ============================================================================
// Iterator behaviour
// ============================================================================

#[test]
fn scanner_is_resumable_and_fused() {
    let mut scanner = Scanner::new("a b");
    assert_eq!(scanner.next().map(|s| s.text), Some("a"));
    assert_eq!(scanner.next().map(|s| s.text), Some(" "));
    assert_eq!(scanner.next().map(|s| s.text), Some("b"));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

//! End-to-end plaintext extraction over realistic articles
//!
//! These tests run the full pipeline (lexer plus stream processor plus
//! rendering) against article fixtures and check what survives into the
//! plain text and what is stripped out.

use std::time::{Duration, Instant};
use wikiplain::pipeline::{extract_plaintext, extract_plaintext_with_deadline};
use wikiplain::testing::samples;

#[test]
fn test_adult_contemporary_extraction() {
    let text = extract_plaintext(samples::ADULT_CONTEMPORARY);

    // Bold markers are stripped, the template in the lead is elided
    assert!(text.starts_with("AC () on"));
    assert!(text.contains("Hot AC"));
    assert!(text.contains("0–10"));

    // Wiki links keep their display text
    assert!(text.contains("formaattiradio"));
    assert!(text.contains("CHR"));
    assert!(text.contains("pophittejä"));
    assert!(!text.contains("pop|pophittejä"));
    assert!(text.contains("The Voice (radioasema)"));

    // Templates, headings, namespace and interlanguage links are gone
    assert!(!text.contains("lyhenne"));
    assert!(!text.contains("Tynkä"));
    assert!(!text.contains("Katso"));
    assert!(!text.contains("Luokka"));
    assert!(!text.contains("Populaarimusiikki"));
    assert!(!text.contains("{{"));
    assert!(!text.contains("[["));
    assert!(!text.contains("=="));

    // Newline runs are capped at two
    assert!(!text.contains("\n\n\n"));

    // The interlanguage links at the end leave only whitespace behind
    assert!(text.trim_end().ends_with("(radioasema)"));
}

#[test]
fn test_tall_bridge_extraction() {
    let text = extract_plaintext(samples::TALL_BRIDGE);

    assert!(text.starts_with("Tall Bridge is a"));
    assert!(text.contains("truss bridge"));
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("in 1910"));

    // The piped link keeps the display text, not the target
    assert!(text.contains("Green River"));
    assert!(!text.contains("Utah"));

    // The non-breaking space becomes a plain space
    assert!(text.contains("4 000 dollars"));

    // References and the table are elided, the external link keeps its label
    assert!(text.contains("Bridge record"));
    assert!(!text.contains("example.com"));
    assert!(!text.contains("cite"));
    assert!(!text.contains("wikitable"));
    assert!(!text.contains("Opened"));

    // Heading text and trailing category and interlanguage links are gone
    assert!(!text.contains("History"));
    assert!(!text.contains("Category"));
    assert!(!text.contains("Hohe"));
}

#[test]
fn test_small_inputs() {
    insta::assert_snapshot!(
        extract_plaintext("Hello '''world'''."),
        @"Hello world."
    );
    insta::assert_snapshot!(
        extract_plaintext("See [http://example.com/docs the docs] here."),
        @"See the docs here."
    );
    insta::assert_snapshot!(
        extract_plaintext("A {{tmpl|arg}} B."),
        @"A  B."
    );
    assert_eq!(extract_plaintext(""), "");
}

#[test]
fn test_newline_runs_are_capped() {
    assert_eq!(extract_plaintext("a\n\n\n\n\nb"), "a\n\nb");
    assert_eq!(extract_plaintext("a\n\nb"), "a\n\nb");
}

#[test]
fn test_insidious_urls_extract_quickly() {
    let source = format!(
        "Ks. {} ja {}",
        samples::INSIDIOUS_URLS[0],
        samples::INSIDIOUS_URLS[1]
    );
    let start = Instant::now();
    let text = extract_plaintext_with_deadline(&source, Duration::from_millis(250));
    assert!(start.elapsed() < Duration::from_secs(5));
    assert!(text.contains("Ks."));
}

#[test]
fn test_truncated_markup_yields_leading_text() {
    // An unclosed construct swallows the rest of the stream and emits
    // nothing itself, whatever its kind; output before it is kept
    assert_eq!(extract_plaintext("kept {{cut off"), "kept ");
    assert_eq!(extract_plaintext("kept [[cut off"), "kept ");
    assert_eq!(extract_plaintext("kept [http://example.com cut"), "kept ");
    assert_eq!(extract_plaintext("kept <ref>cut off"), "kept ");
    assert_eq!(extract_plaintext("kept \n{| cut"), "kept ");
}

#[test]
fn test_deeply_nested_constructs() {
    // Nesting depth maps to recursion depth; a thousand levels must
    // resolve without overflowing the stack
    let templates = format!("kept {}x{}", "{{".repeat(1000), "}}".repeat(1000));
    assert_eq!(extract_plaintext(&templates), "kept ");

    let links = format!("{}x{}", "[[".repeat(1000), "]]".repeat(1000));
    assert_eq!(extract_plaintext(&links).trim(), "x");
}

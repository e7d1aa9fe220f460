//! The token rule catalog
//!
//! Each rule pairs a [`TokenKind`] with a regex matched against the start of
//! the remaining input. The catalog is tried top to bottom at every scan
//! position and the first rule that matches wins, so rule order is the match
//! priority: specific markers (`'''`, `[[`, `\n{|`) sit above the
//! single-character rules they would otherwise lose to.
//!
//! Patterns are compiled once, wrapped in `\A(?:...)` so alternations stay
//! anchored to the scan position.

use crate::lexer::tokens::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

// http://daringfireball.net/2010/07/improved_regex_for_matching_urls
const URL_PATTERN: &str = r#"(?i)\b((?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\(([^\s()<>]+|(\([^\s()<>]+\)))*\))+(?:\(([^\s()<>]+|(\([^\s()<>]+\)))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’]))"#;

/// Token rules as (kind, pattern) pairs.
/// Order matters: rules are tried in declaration order, earlier rules shadow
/// later ones at the same position.
const RULE_PATTERNS: &[(TokenKind, &str)] = &[
    // Paired markup markers
    (TokenKind::BeginTemplate, r"\{\{"),
    (TokenKind::EndTemplate, r"\}\}"),
    (TokenKind::ToggleBold, r"[']{3}"),
    (TokenKind::ToggleItalics, r"[']{2}"),
    (TokenKind::BeginWikiLink, r"[\[]{2}"),
    (TokenKind::EndWikiLink, r"\]\]"),
    (TokenKind::BeginExternalLink, r"\["),
    (TokenKind::EndExternalLink, r"\]"),
    (TokenKind::BeginTable, r"\n\{\|"),
    (TokenKind::EndTable, r"\n\|\}"),
    (TokenKind::Equals, r"="),
    // Reference and HTML tag forms
    (
        TokenKind::Reference,
        r#"<ref name ?= ?['"]{1}[^'"]+['"]{1} ?/>"#,
    ),
    (
        TokenKind::BeginNamedReference,
        r#"<ref name ?= ?['"]{1}[^'"]+['"]{1}>"#,
    ),
    (TokenKind::BeginReference, r"<ref>"),
    (TokenKind::EndReference, r"</ref>"),
    (TokenKind::ClosedHTMLTag, r"<[a-z]+( [a-z]+=[a-z]+)* ?/>"),
    (TokenKind::NonBreakingSpace, r"&nbsp;"),
    // Line structure and whitespace
    (TokenKind::ListItem, r"\n\*"),
    (TokenKind::NewLine, r"\n"),
    (TokenKind::Space, r" "),
    (TokenKind::OtherSpace, r"\s"),
    (TokenKind::Pipe, r"\|"),
    // Content
    (TokenKind::URL, URL_PATTERN),
    (TokenKind::Word, r"[\w]+"),
    (TokenKind::Punctuation, r#"[/.,:;\-()"–-]"#),
];

/// One compiled catalog entry.
#[derive(Debug)]
pub struct Rule {
    kind: TokenKind,
    pattern: Regex,
}

impl Rule {
    fn compile(kind: TokenKind, pattern: &str) -> Self {
        let anchored = format!(r"\A(?:{})", pattern);
        Rule {
            kind,
            pattern: Regex::new(&anchored).unwrap(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Try to match this rule at the start of `suffix`.
    ///
    /// Returns the match length in bytes. A word match is truncated just
    /// before an embedded `&`; a match of length zero counts as no match.
    pub fn try_match(&self, suffix: &str) -> Option<usize> {
        let mut length = self.pattern.find(suffix)?.end();
        if self.kind == TokenKind::Word {
            if let Some(cut) = suffix[..length].find('&') {
                length = cut;
            }
        }
        if length == 0 {
            return None;
        }
        Some(length)
    }
}

static CATALOG: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|(kind, pattern)| Rule::compile(*kind, pattern))
        .collect()
});

/// The compiled rule catalog, in priority order.
pub fn catalog() -> &'static [Rule] {
    CATALOG.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// First catalog rule matching at the start of `text`, with its length.
    fn first_match(text: &str) -> Option<(TokenKind, usize)> {
        catalog()
            .iter()
            .find_map(|rule| rule.try_match(text).map(|length| (rule.kind(), length)))
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(catalog().len(), 25);
        assert_eq!(catalog()[0].kind(), TokenKind::BeginTemplate);
        assert_eq!(catalog()[24].kind(), TokenKind::Punctuation);
    }

    #[test]
    fn test_longer_markers_win() {
        assert_eq!(first_match("{{x"), Some((TokenKind::BeginTemplate, 2)));
        assert_eq!(first_match("}}"), Some((TokenKind::EndTemplate, 2)));
        assert_eq!(first_match("'''bold"), Some((TokenKind::ToggleBold, 3)));
        assert_eq!(first_match("''italic"), Some((TokenKind::ToggleItalics, 2)));
        assert_eq!(first_match("[[page"), Some((TokenKind::BeginWikiLink, 2)));
        assert_eq!(first_match("]]"), Some((TokenKind::EndWikiLink, 2)));
        assert_eq!(first_match("[http"), Some((TokenKind::BeginExternalLink, 1)));
        assert_eq!(first_match("\n{| class"), Some((TokenKind::BeginTable, 3)));
        assert_eq!(first_match("\n|}"), Some((TokenKind::EndTable, 3)));
        assert_eq!(first_match("\n* item"), Some((TokenKind::ListItem, 2)));
        assert_eq!(first_match("\n\n"), Some((TokenKind::NewLine, 1)));
    }

    #[test]
    fn test_reference_forms() {
        let self_closing = r#"<ref name="kotus"/>"#;
        assert_eq!(
            first_match(self_closing),
            Some((TokenKind::Reference, self_closing.len()))
        );

        let spaced = r#"<ref name = 'kotus' />"#;
        assert_eq!(
            first_match(spaced),
            Some((TokenKind::Reference, spaced.len()))
        );

        let named_open = r#"<ref name="kotus">"#;
        assert_eq!(
            first_match(named_open),
            Some((TokenKind::BeginNamedReference, named_open.len()))
        );

        assert_eq!(first_match("<ref>"), Some((TokenKind::BeginReference, 5)));
        assert_eq!(first_match("</ref>"), Some((TokenKind::EndReference, 6)));
    }

    #[test]
    fn test_closed_html_tag() {
        assert_eq!(first_match("<br/>"), Some((TokenKind::ClosedHTMLTag, 5)));
        assert_eq!(first_match("<br />"), Some((TokenKind::ClosedHTMLTag, 6)));
        assert_eq!(
            first_match("<div class=wide/>"),
            Some((TokenKind::ClosedHTMLTag, 17))
        );
        // An open tag is not in the catalog at all
        assert_eq!(first_match("<div>"), None);
    }

    #[test]
    fn test_url_forms() {
        let plain = "http://example.com/path";
        assert_eq!(first_match(plain), Some((TokenKind::URL, plain.len())));

        let www = "www.example.com";
        assert_eq!(first_match(www), Some((TokenKind::URL, www.len())));

        let bare_host = "example.com/wiki";
        assert_eq!(
            first_match(bare_host),
            Some((TokenKind::URL, bare_host.len()))
        );

        // Trailing punctuation stays outside the match
        assert_eq!(
            first_match("http://example.com/x)"),
            Some((TokenKind::URL, "http://example.com/x".len()))
        );
    }

    #[test]
    fn test_word_and_punctuation() {
        assert_eq!(first_match("hello world"), Some((TokenKind::Word, 5)));
        assert_eq!(
            first_match("tønder,"),
            Some((TokenKind::Word, "tønder".len()))
        );
        // The ampersand itself is never part of a word
        assert_eq!(first_match("AT&T"), Some((TokenKind::Word, 2)));
        assert_eq!(first_match("– dash"), Some((TokenKind::Punctuation, "–".len())));
        assert_eq!(first_match("; rest"), Some((TokenKind::Punctuation, 1)));
    }

    #[test]
    fn test_whitespace_ordering() {
        assert_eq!(first_match(" x"), Some((TokenKind::Space, 1)));
        assert_eq!(first_match("\tx"), Some((TokenKind::OtherSpace, 1)));
        assert_eq!(first_match("&nbsp;x"), Some((TokenKind::NonBreakingSpace, 6)));
    }

    #[test]
    fn test_uncovered_characters() {
        assert_eq!(first_match("<"), None);
        assert_eq!(first_match("&x"), None);
        assert_eq!(first_match("*"), None);
        assert_eq!(first_match("{x"), None);
    }
}

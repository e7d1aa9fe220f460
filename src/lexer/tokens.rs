//! Token definitions for wiki markup
//!
//! This module defines all the tokens the lexer can produce. The variant
//! order of [`TokenKind`] mirrors the rule catalog order in
//! [`rules`](crate::lexer::rules), which is the match priority and part of
//! the crate's external contract.
use std::fmt;

/// All token categories the lexer can emit, in catalog priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// `{{` opening a template
    BeginTemplate,
    /// `}}` closing a template
    EndTemplate,
    /// `'''` bold marker
    ToggleBold,
    /// `''` italics marker
    ToggleItalics,
    /// `[[` opening a wiki link
    BeginWikiLink,
    /// `]]` closing a wiki link
    EndWikiLink,
    /// `[` opening an external link
    BeginExternalLink,
    /// `]` closing an external link
    EndExternalLink,
    /// Newline followed by `{|`, opening a table
    BeginTable,
    /// Newline followed by `|}`, closing a table
    EndTable,
    /// `=`, used for headings
    Equals,
    /// Self-closing named reference, e.g. `<ref name="x"/>`
    Reference,
    /// Opening named reference, e.g. `<ref name="x">`
    BeginNamedReference,
    /// `<ref>` opening an anonymous reference
    BeginReference,
    /// `</ref>` closing a reference
    EndReference,
    /// Self-closing HTML tag, e.g. `<br/>`
    ClosedHTMLTag,
    /// `&nbsp;` entity
    NonBreakingSpace,
    /// Newline followed by `*`, starting a list item
    ListItem,
    /// `\n`
    NewLine,
    /// A single space
    Space,
    /// Any other whitespace character
    OtherSpace,
    /// `|`
    Pipe,
    /// A URL
    URL,
    /// A run of word characters
    Word,
    /// A single punctuation character
    Punctuation,
}

impl TokenKind {
    /// Stable lowercase name used in dump output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::BeginTemplate => "begin-template",
            TokenKind::EndTemplate => "end-template",
            TokenKind::ToggleBold => "toggle-bold",
            TokenKind::ToggleItalics => "toggle-italics",
            TokenKind::BeginWikiLink => "begin-wiki-link",
            TokenKind::EndWikiLink => "end-wiki-link",
            TokenKind::BeginExternalLink => "begin-external-link",
            TokenKind::EndExternalLink => "end-external-link",
            TokenKind::BeginTable => "begin-table",
            TokenKind::EndTable => "end-table",
            TokenKind::Equals => "equals",
            TokenKind::Reference => "reference",
            TokenKind::BeginNamedReference => "begin-named-reference",
            TokenKind::BeginReference => "begin-reference",
            TokenKind::EndReference => "end-reference",
            TokenKind::ClosedHTMLTag => "closed-html-tag",
            TokenKind::NonBreakingSpace => "non-breaking-space",
            TokenKind::ListItem => "list-item",
            TokenKind::NewLine => "new-line",
            TokenKind::Space => "space",
            TokenKind::OtherSpace => "other-space",
            TokenKind::Pipe => "pipe",
            TokenKind::URL => "url",
            TokenKind::Word => "word",
            TokenKind::Punctuation => "punctuation",
        }
    }

    /// Check if tokens of this kind carry variable text (shown in dumps).
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Reference
                | TokenKind::BeginNamedReference
                | TokenKind::ClosedHTMLTag
                | TokenKind::OtherSpace
                | TokenKind::URL
                | TokenKind::Word
                | TokenKind::Punctuation
        )
    }

    /// Check if this kind is pure formatting that plaintext extraction drops
    /// wherever it appears.
    pub fn is_ignorable(&self) -> bool {
        matches!(
            self,
            TokenKind::ToggleBold
                | TokenKind::ToggleItalics
                | TokenKind::Reference
                | TokenKind::ClosedHTMLTag
        )
    }
}

/// A token: a kind plus the exact source text it covers.
///
/// The text is always the verbatim source slice the rule matched, so
/// concatenating the texts of a token stream reproduces the covered parts of
/// the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// The space token the processor synthesizes for headings, links and
    /// `&nbsp;` rewrites.
    pub fn space() -> Self {
        Token::new(TokenKind::Space, " ")
    }

    /// The newline token the processor synthesizes for list items and links.
    pub fn newline() -> Self {
        Token::new(TokenKind::NewLine, "\n")
    }

    /// Check if this token is pure formatting (see [`TokenKind::is_ignorable`]).
    pub fn is_ignorable(&self) -> bool {
        self.kind.is_ignorable()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_payload() {
            write!(f, "<{}:{}>", self.kind.name(), self.text.escape_debug())
        } else {
            write!(f, "<{}>", self.kind.name())
        }
    }
}

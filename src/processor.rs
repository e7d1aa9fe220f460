//! Single-pass plaintext extraction from a token stream
//!
//! [`PlaintextStream`] walks the lexer's token stream once and rewrites it
//! into the tokens a reader would see as text: templates, tables and
//! references disappear, wiki links and external links reduce to their
//! display text, headings collapse to a separating space, list item markers
//! become newlines, and formatting toggles are dropped.
//!
//! Each nested construct is handled by one recursive call that owns the
//! construct's accumulation state, so nesting depth maps to call depth and
//! nothing escapes a construct except its finished emission. A construct cut
//! off by the end of input emits nothing; output produced before it is
//! unaffected.

use crate::lexer::{Token, TokenKind};
use std::collections::VecDeque;

/// How a nested construct ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructEnd {
    /// The construct's closing token was seen.
    Closed,
    /// The token stream ran out before the closing token.
    Exhausted,
}

/// Iterator adapter turning markup tokens into plaintext tokens.
pub struct PlaintextStream<I> {
    tokens: I,
    pending: VecDeque<Token>,
}

impl<I: Iterator<Item = Token>> PlaintextStream<I> {
    pub fn new(tokens: I) -> Self {
        PlaintextStream {
            tokens,
            pending: VecDeque::new(),
        }
    }

    /// Collapse a heading to a single space token.
    ///
    /// The caller has just pulled the first `=`. Returns the replacement
    /// token, or `None` when the input ends before the heading does.
    fn collapse_heading(&mut self) -> Option<Token> {
        log::trace!("collapsing heading");

        // Opening run: the trigger plus any further `=` tokens. The token
        // ending the run is consumed and dropped with the heading text.
        let mut level = 1usize;
        loop {
            let token = self.tokens.next()?;
            if token.kind != TokenKind::Equals {
                break;
            }
            level += 1;
        }

        // Heading text, up to the first closing `=`. A newline first means
        // the heading never closes; it is swallowed and the heading still
        // collapses to a space.
        loop {
            let token = self.tokens.next()?;
            match token.kind {
                TokenKind::Equals => break,
                TokenKind::NewLine => return Some(Token::space()),
                _ => {}
            }
        }

        // Closing run: one `=` is already consumed. A level-one heading
        // stops there; deeper ones consume level - 1 more `=` tokens,
        // giving up at a newline.
        if level > 1 {
            let mut remaining = level - 1;
            while remaining > 0 {
                let token = self.tokens.next()?;
                match token.kind {
                    TokenKind::Equals => remaining -= 1,
                    TokenKind::NewLine => remaining = 0,
                    _ => {}
                }
            }
        }

        Some(Token::space())
    }

    /// Consume a balanced construct delimited by `open`/`close` tokens,
    /// recursing on nested openers. Nothing is emitted.
    fn elide_balanced(&mut self, open: TokenKind, close: TokenKind) -> ConstructEnd {
        log::trace!("eliding {:?} construct", open);
        loop {
            let Some(token) = self.tokens.next() else {
                return ConstructEnd::Exhausted;
            };
            if token.kind == open {
                if self.elide_balanced(open, close) == ConstructEnd::Exhausted {
                    return ConstructEnd::Exhausted;
                }
            } else if token.kind == close {
                return ConstructEnd::Closed;
            }
        }
    }

    /// Consume a reference up to its closing tag. Templates inside the
    /// reference are elided as balanced constructs; everything else is
    /// dropped uninterpreted.
    fn elide_reference(&mut self) -> ConstructEnd {
        log::trace!("eliding reference");
        loop {
            let Some(token) = self.tokens.next() else {
                return ConstructEnd::Exhausted;
            };
            match token.kind {
                TokenKind::EndReference => return ConstructEnd::Closed,
                TokenKind::BeginTemplate => {
                    let end = self.elide_balanced(TokenKind::BeginTemplate, TokenKind::EndTemplate);
                    if end == ConstructEnd::Exhausted {
                        return ConstructEnd::Exhausted;
                    }
                }
                _ => {}
            }
        }
    }

    /// Buffer a wiki link up to its closing `]]` and reduce it to display
    /// text. A nested link is resolved recursively and its emission spliced
    /// into the buffer, where the outer link's pipe and colon rules apply to
    /// it like any other text.
    fn take_wiki_link(&mut self) -> (Vec<Token>, ConstructEnd) {
        log::trace!("buffering wiki link");
        let mut buffer = Vec::new();
        loop {
            let Some(token) = self.tokens.next() else {
                return (Vec::new(), ConstructEnd::Exhausted);
            };
            match token.kind {
                TokenKind::BeginWikiLink => {
                    let (nested, end) = self.take_wiki_link();
                    if end == ConstructEnd::Exhausted {
                        return (Vec::new(), ConstructEnd::Exhausted);
                    }
                    buffer.extend(nested);
                }
                TokenKind::EndWikiLink => {
                    return (close_wiki_link(buffer), ConstructEnd::Closed)
                }
                _ => buffer.push(token),
            }
        }
    }

    /// Buffer an external link up to its closing `]` and reduce it to its
    /// label.
    fn take_external_link(&mut self) -> (Vec<Token>, ConstructEnd) {
        log::trace!("buffering external link");
        let mut buffer = Vec::new();
        loop {
            let Some(token) = self.tokens.next() else {
                return (Vec::new(), ConstructEnd::Exhausted);
            };
            if token.kind == TokenKind::EndExternalLink {
                return (close_external_link(buffer), ConstructEnd::Closed);
            }
            buffer.push(token);
        }
    }
}

impl<I: Iterator<Item = Token>> Iterator for PlaintextStream<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(queued) = self.pending.pop_front() {
                return Some(queued);
            }

            let token = self.tokens.next()?;
            match token.kind {
                kind if kind.is_ignorable() => {}
                TokenKind::NonBreakingSpace => return Some(Token::space()),
                TokenKind::Equals => match self.collapse_heading() {
                    Some(replacement) => return Some(replacement),
                    // Input ended inside the heading; it emits nothing.
                    None => {}
                },
                TokenKind::ListItem => return Some(Token::newline()),
                TokenKind::BeginTemplate => {
                    self.elide_balanced(TokenKind::BeginTemplate, TokenKind::EndTemplate);
                }
                TokenKind::BeginTable => {
                    self.elide_balanced(TokenKind::BeginTable, TokenKind::EndTable);
                }
                TokenKind::BeginReference | TokenKind::BeginNamedReference => {
                    self.elide_reference();
                }
                TokenKind::BeginWikiLink => {
                    let (emission, _) = self.take_wiki_link();
                    self.pending.extend(emission);
                }
                TokenKind::BeginExternalLink => {
                    let (emission, _) = self.take_external_link();
                    self.pending.extend(emission);
                }
                // Everything else, stray closing markers included, passes
                // through unchanged.
                _ => return Some(token),
            }
        }
    }
}

/// Reduce a finished wiki link buffer to its emitted tokens.
///
/// A pipe keeps only the text after it; a colon in the kept text marks a
/// namespace or interwiki link, which emits nothing at all. Otherwise the
/// display text is emitted flanked by single spaces, with one trailing
/// newline when the buffer contained any.
fn close_wiki_link(buffer: Vec<Token>) -> Vec<Token> {
    let mut kept: Vec<Token> = Vec::new();
    let mut saw_newline = false;
    for token in buffer {
        match token.kind {
            TokenKind::NewLine => saw_newline = true,
            TokenKind::Pipe => kept.clear(),
            _ => kept.push(token),
        }
    }

    let is_namespace = kept
        .iter()
        .any(|t| t.kind == TokenKind::Punctuation && t.text == ":");
    if is_namespace {
        return Vec::new();
    }

    kept.retain(|t| !t.is_ignorable());
    if kept.is_empty() && !saw_newline {
        return Vec::new();
    }

    let mut emitted = Vec::with_capacity(kept.len() + 3);
    emitted.push(Token::space());
    emitted.extend(kept);
    if saw_newline {
        emitted.push(Token::newline());
    }
    emitted.push(Token::space());
    emitted
}

/// Reduce a finished external link buffer to its label.
///
/// The URL and everything before it are dropped, as are newlines and the
/// spaces between the URL and the label; a bare `[url]` emits nothing.
fn close_external_link(buffer: Vec<Token>) -> Vec<Token> {
    let mut kept: Vec<Token> = Vec::new();
    for token in buffer {
        match token.kind {
            TokenKind::NewLine => {}
            TokenKind::URL => kept.clear(),
            TokenKind::Space if kept.is_empty() => {}
            _ => kept.push(token),
        }
    }
    kept.retain(|t| !t.is_ignorable());
    kept
}

/// Process a whole token stream eagerly, collecting the plaintext tokens.
pub fn process<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    PlaintextStream::new(tokens.into_iter()).collect()
}

//! The scanning loop
//!
//! At every byte position the scanner tries the rule catalog in priority
//! order and emits a token for the first rule that matches. When no rule
//! matches, the scanner silently skips one character and carries on, so any
//! input produces a token stream and the scan always makes forward progress.
//!
//! Every matching attempt runs under a [`MatchDeadline`]; an attempt that
//! overruns its budget is discarded as if it had not matched.

use crate::lexer::deadline::{MatchDeadline, DEFAULT_MATCH_DEADLINE};
use crate::lexer::rules::{catalog, Rule};
use crate::lexer::tokens::{Token, TokenKind};
use std::time::Duration;

/// Iterator producing tokens from wiki markup source text.
pub struct Scanner<'a> {
    source: &'a str,
    position: usize,
    rules: &'static [Rule],
    deadline: Duration,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default per-match deadline.
    pub fn new(source: &'a str) -> Self {
        Scanner::with_deadline(source, DEFAULT_MATCH_DEADLINE)
    }

    /// Create a scanner with a caller-supplied per-match deadline.
    pub fn with_deadline(source: &'a str, deadline: Duration) -> Self {
        Scanner {
            source,
            position: 0,
            rules: catalog(),
            deadline,
        }
    }

    /// Byte position the next call to `next` will scan from.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Try every rule at the start of `suffix`, in catalog order.
    fn match_suffix(&self, suffix: &str) -> Option<(TokenKind, usize)> {
        for rule in self.rules {
            let deadline = MatchDeadline::start(self.deadline);
            let attempt = rule.try_match(suffix);
            let admitted = deadline.admit(attempt);
            if attempt.is_some() && admitted.is_none() {
                log::debug!(
                    "{:?} match at byte {} overran the {:?} budget; discarded",
                    rule.kind(),
                    self.position,
                    self.deadline
                );
            }
            if let Some(length) = admitted {
                return Some((rule.kind(), length));
            }
        }
        None
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.position < self.source.len() {
            let suffix = &self.source[self.position..];
            if let Some((kind, length)) = self.match_suffix(suffix) {
                log::trace!("{:?} matched {} bytes at {}", kind, length, self.position);
                let text = &suffix[..length];
                self.position += length;
                return Some(Token::new(kind, text));
            }

            // No rule matched; skip one character without emitting anything.
            let skipped = match suffix.chars().next() {
                Some(c) => c,
                None => break,
            };
            log::debug!(
                "no rule matched at byte {}; skipping {:?}",
                self.position,
                skipped
            );
            self.position += skipped.len_utf8();
        }
        None
    }
}

/// Tokenize `source` with the default per-match deadline.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

/// Tokenize `source` with a caller-supplied per-match deadline.
pub fn tokenize_with_deadline(source: &str, deadline: Duration) -> Vec<Token> {
    Scanner::with_deadline(source, deadline).collect()
}

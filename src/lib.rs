//! # wikiplain
//!
//! A plaintext extractor for MediaWiki markup.
//!
//! The [lexer](crate::lexer) scans markup with an ordered catalog of regex
//! rules, guarded by a per-match deadline, and produces a flat token stream.
//! The [processor](crate::processor) walks that stream in a single pass and
//! reduces it to the tokens a reader would see as text: templates, tables
//! and references are elided, links keep their display text, headings
//! collapse, formatting markers disappear. The [pipeline](crate::pipeline)
//! module wraps both behind a stage/format interface used by the
//! `wikiplain` binary.
//!
//! ## Testing
//!
//! Shared fixtures and token-building helpers live in the
//! [testing module](crate::testing); tests build their inputs from those
//! instead of inlining ad-hoc markup.

pub mod lexer;
pub mod pipeline;
pub mod processor;
pub mod testing;

pub use lexer::{tokenize, tokenize_with_deadline, Scanner, Token, TokenKind};
pub use pipeline::{extract_plaintext, extract_plaintext_with_deadline};
pub use processor::{process, ConstructEnd, PlaintextStream};

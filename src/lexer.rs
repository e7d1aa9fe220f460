//! Lexer for wiki markup
//!
//! This module turns raw markup text into a stream of typed tokens using an
//! ordered catalog of regex rules.
//!
//! Priority Scanning
//!
//! Wiki markup has no reserved characters: `'`, `[`, `|` and friends are
//! markup in some positions and plain text in others, and several markers
//! share prefixes (`'''` vs `''`, `[[` vs `[`, `\n{|` vs `\n`). Instead of a
//! grammar, the lexer keeps a flat catalog of regex rules in priority order
//! and, at each position, emits a token for the first rule that matches.
//! Characters no rule covers are skipped silently, which makes the lexer
//! total: any input produces a token stream.
//!
//! Each matching attempt runs under a wall-clock deadline. The linear-time
//! regex engine already bounds the cost of a single attempt, so the deadline
//! exists as a second line of defense for hostile inputs; an attempt that
//! overruns it is treated as no match.

pub mod deadline;
pub mod rules;
pub mod scanner;
pub mod tokens;

pub use deadline::{MatchDeadline, DEFAULT_MATCH_DEADLINE};
pub use rules::{catalog, Rule};
pub use scanner::{tokenize, tokenize_with_deadline, Scanner};
pub use tokens::{Token, TokenKind};

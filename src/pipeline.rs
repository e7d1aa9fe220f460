//! Processing API for wiki markup sources
//!
//! This module ties the lexer and the stream processor together behind a
//! small stage/format interface: the `Tokens` stage stops after lexing and
//! dumps the token stream, the `Plaintext` stage runs the full extraction
//! and renders text. Format strings like `"tokens-json"` or `"text-plain"`
//! select a stage/format pair.
//!
//! Rendered plaintext truncates any run of three or more newline tokens to
//! two, so eliding full-line constructs does not leave walls of blank lines
//! behind.

use crate::lexer::{self, Token, TokenKind};
use crate::processor::PlaintextStream;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Represents the processing stage (how far to take the input)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Tokens,
    Plaintext,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Plain,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "tokens-simple" or "text-plain"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let parts: Vec<&str> = format_str.split('-').collect();
        if parts.len() < 2 {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        let stage = match parts[0] {
            "tokens" => ProcessingStage::Tokens,
            "text" => ProcessingStage::Plaintext,
            _ => return Err(ProcessingError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1..].join("-").as_str() {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "plain" => OutputFormat::Plain,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        // Validate stage/format compatibility
        match (&stage, &format) {
            (ProcessingStage::Tokens, OutputFormat::Plain) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'plain' only works with the text stage".to_string(),
                ))
            }
            (ProcessingStage::Plaintext, OutputFormat::Simple)
            | (ProcessingStage::Plaintext, OutputFormat::Json) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{:?}' only works with the tokens stage",
                    format
                )))
            }
            _ => {}
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all valid processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Tokens,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Plaintext,
                format: OutputFormat::Plain,
            },
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// Render plaintext tokens to a string, truncating any run of three or more
/// newline tokens to two.
pub fn render_plaintext<I>(tokens: I) -> String
where
    I: IntoIterator<Item = Token>,
{
    let mut out = String::new();
    let mut newlines = 0;
    for token in tokens {
        if token.kind == TokenKind::NewLine {
            newlines += 1;
        } else {
            newlines = 0;
        }
        if newlines < 3 {
            out.push_str(&token.text);
        }
    }
    out
}

/// Extract plaintext from wiki markup with the default match deadline.
pub fn extract_plaintext(source: &str) -> String {
    extract_plaintext_with_deadline(source, lexer::DEFAULT_MATCH_DEADLINE)
}

/// Extract plaintext from wiki markup with a caller-supplied match deadline.
pub fn extract_plaintext_with_deadline(source: &str, deadline: Duration) -> String {
    log::debug!("extracting plaintext from {} bytes of markup", source.len());
    let scanner = lexer::Scanner::with_deadline(source, deadline);
    render_plaintext(PlaintextStream::new(scanner))
}

/// Format a token stream according to the specified output format.
///
/// Only the token dump formats are handled here; the plain format belongs
/// to the text stage.
pub fn format_tokens(tokens: &[Token], format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&format!("{}", token));
                if token.kind == TokenKind::NewLine {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(tokens)
                .map_err(|e| ProcessingError::IoError(e.to_string()))?;
            Ok(json)
        }
        OutputFormat::Plain => Err(ProcessingError::InvalidFormatType(
            "plain format only works with the text stage".to_string(),
        )),
    }
}

/// Process in-memory source according to the given specification.
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_source_with_deadline(source, spec, lexer::DEFAULT_MATCH_DEADLINE)
}

/// Process in-memory source with a caller-supplied match deadline.
pub fn process_source_with_deadline(
    source: &str,
    spec: &ProcessingSpec,
    deadline: Duration,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Tokens => {
            let tokens = lexer::tokenize_with_deadline(source, deadline);
            format_tokens(&tokens, &spec.format)
        }
        ProcessingStage::Plaintext => Ok(extract_plaintext_with_deadline(source, deadline)),
    }
}

/// Process a wiki markup file according to the given specification.
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec)
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Tokens => "tokens",
                    ProcessingStage::Plaintext => "text",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                    OutputFormat::Plain => "plain",
                }
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::word;

    #[test]
    fn test_processing_spec_parsing() {
        let spec = ProcessingSpec::from_string("tokens-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Tokens);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("tokens-json").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Tokens);
        assert_eq!(spec.format, OutputFormat::Json);

        let spec = ProcessingSpec::from_string("text-plain").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Plaintext);
        assert_eq!(spec.format, OutputFormat::Plain);

        assert!(ProcessingSpec::from_string("invalid").is_err());
        assert!(ProcessingSpec::from_string("tokens-invalid").is_err());
        assert!(ProcessingSpec::from_string("invalid-simple").is_err());

        // Stage/format mismatches are rejected
        assert!(ProcessingSpec::from_string("tokens-plain").is_err());
        assert!(ProcessingSpec::from_string("text-json").is_err());
    }

    #[test]
    fn test_token_formatting() {
        let tokens = vec![word("hello"), Token::space(), word("world"), Token::newline()];

        let simple = format_tokens(&tokens, &OutputFormat::Simple).unwrap();
        assert_eq!(simple, "<word:hello><space><word:world><new-line>\n");

        let json = format_tokens(&tokens, &OutputFormat::Json).unwrap();
        assert!(json.contains("\"Word\""));
        assert!(json.contains("\"Space\""));
        assert!(json.contains("\"NewLine\""));

        assert!(format_tokens(&tokens, &OutputFormat::Plain).is_err());
    }

    #[test]
    fn test_render_truncates_newline_runs() {
        let tokens = vec![
            word("a"),
            Token::newline(),
            Token::newline(),
            Token::newline(),
            Token::newline(),
            word("b"),
        ];
        assert_eq!(render_plaintext(tokens), "a\n\nb");

        let tokens = vec![word("a"), Token::newline(), Token::newline(), word("b")];
        assert_eq!(render_plaintext(tokens), "a\n\nb");
    }

    #[test]
    fn test_extract_plaintext() {
        assert_eq!(extract_plaintext("Hello '''world'''."), "Hello world.");
        assert_eq!(extract_plaintext(""), "");
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert!(formats.contains(&"tokens-simple".to_string()));
        assert!(formats.contains(&"tokens-json".to_string()));
        assert!(formats.contains(&"text-plain".to_string()));
    }

    #[test]
    fn test_process_file_reports_io_errors() {
        let spec = ProcessingSpec::from_string("text-plain").unwrap();
        let result = process_file("does/not/exist.wiki", &spec);
        assert!(matches!(result, Err(ProcessingError::IoError(_))));
    }
}

//! Error types for the conversion core

use std::fmt;

/// Errors raised by the JSON direction of the converter.
///
/// The structured-text direction never errors; see
/// [`crate::parse_structured_text`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input was not syntactically valid JSON.
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidJson { message, .. } => {
                write!(f, "invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

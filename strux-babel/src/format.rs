//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing and serializing documents.

use crate::error::FormatError;
use strux_parser::Value;

/// Trait for document formats
///
/// Implementors provide bidirectional conversion between string representation and the
/// document tree. Formats can support parsing, serialization, or both.
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "text")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Whether this format supports parsing (source → document)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (document → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a document tree
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Value, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a document tree into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _doc: &Value) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}

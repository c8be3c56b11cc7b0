//! JSON format implementation
//!
//! Both directions delegate to serde_json via strux-parser's bridge.
//! Parsing is strict: malformed JSON surfaces as a ParseError.

use crate::error::FormatError;
use crate::format::Format;
use strux_parser::{doc_to_json, json_to_doc, Value};

/// Format implementation for JSON.
///
/// `indent` controls pretty-printed output width in spaces.
pub struct JsonFormat {
    indent: usize,
}

impl JsonFormat {
    pub fn new(indent: usize) -> Self {
        JsonFormat { indent }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        JsonFormat::new(2)
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON (strict parsing, pretty-printed output)"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Value, FormatError> {
        json_to_doc(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, doc: &Value) -> Result<String, FormatError> {
        Ok(doc_to_json(doc, self.indent))
    }
}

//! Structured-text format implementation
//!
//! The indentation-based notation handled by strux-parser. Parsing is
//! best-effort and never fails; see the strux-parser crate docs for the
//! round-trip caveats.

use crate::error::FormatError;
use crate::format::Format;
use strux_parser::{parse_structured_text, to_structured_text, Value};

/// Format implementation for the structured-text notation.
///
/// `indent_width` is the number of spaces per nesting level in serialized
/// output.
pub struct StructuredTextFormat {
    indent_width: usize,
}

impl StructuredTextFormat {
    pub fn new(indent_width: usize) -> Self {
        StructuredTextFormat { indent_width }
    }
}

impl Default for StructuredTextFormat {
    fn default() -> Self {
        StructuredTextFormat::new(2)
    }
}

impl Format for StructuredTextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Indentation-based structured text (best-effort parsing)"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Value, FormatError> {
        Ok(parse_structured_text(source))
    }

    fn serialize(&self, doc: &Value) -> Result<String, FormatError> {
        Ok(to_structured_text(doc, self.indent_width))
    }
}

//! JSON bridge: both directions delegate to serde_json

use crate::document::Value;
use crate::error::ParseError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Parse JSON text into a document tree.
///
/// Mapping key order follows the source document. Malformed JSON yields a
/// [`ParseError`] carrying the reported line and column.
pub fn json_to_doc(source: &str) -> Result<Value, ParseError> {
    serde_json::from_str(source).map_err(ParseError::from)
}

/// Render a document tree as pretty-printed JSON with `indent` spaces per
/// nesting level.
///
/// A freshly built tree has no cycles and its numbers are finite, so this
/// cannot fail.
pub fn doc_to_json(doc: &Value, indent: usize) -> String {
    let indent_str = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent_str.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)
        .expect("serializing an in-memory document to a buffer does not fail");
    String::from_utf8(buf).expect("serde_json emits UTF-8")
}

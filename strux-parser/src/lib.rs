//! Document tree and structured-text codec for strux
//!
//! This crate owns the two halves of the converter core:
//!
//! - [`Value`]: an untyped document tree (null, bool, number, string,
//!   sequence, insertion-ordered mapping) used as the intermediate
//!   representation for both conversion directions.
//! - The structured-text codec: [`parse_structured_text`] reads the
//!   indentation-based notation (`key: value`, `- item`, `#` comments) into
//!   a [`Value`], and [`to_structured_text`] renders a [`Value`] back out.
//!
//! The JSON direction delegates to serde_json via [`json_to_doc`] and
//! [`doc_to_json`]; mapping key order is preserved end to end.
//!
//! The structured-text notation is a deliberate subset, not YAML. Parsing is
//! best-effort and never fails: inconsistent indentation or a `- ` item with
//! no sequence to land in produce a structurally different tree rather than
//! an error, and strings are rendered unquoted, so values containing colons,
//! dashes or leading whitespace do not round-trip safely. Scalars are
//! re-coerced on every parse, so a string that looks like a number comes
//! back numeric.

pub mod document;
pub mod error;
pub mod json;
pub mod lines;
pub mod parse;
pub mod scalar;
pub mod serialize;

pub use document::{Mapping, Number, Value};
pub use error::ParseError;
pub use json::{doc_to_json, json_to_doc};
pub use parse::parse_structured_text;
pub use scalar::coerce_scalar;
pub use serialize::to_structured_text;

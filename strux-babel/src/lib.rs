//! Format interoperability for strux documents
//!
//! ```text
//!     This crate provides a uniform interface for converting between the
//!     document tree (strux-parser's Value) and the textual formats strux
//!     understands.
//! ```
//!
//! Architecture
//!
//! ```text
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: Concrete implementations for each supported format
//!
//!     This is a pure lib: it powers strux-cli but is shell agnostic, so no
//!     code here should assume a shell environment (std print, env vars etc).
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── <format>
//!     │   │   └── mod.rs          # Format implementation
//!     ├── lib.rs
//! ```
//!
//! Conversion semantics
//!
//! ```text
//!     A conversion parses the whole source into a document tree, then
//!     serializes the tree into the target format. If either half fails the
//!     caller gets an error and no output text: partial output is never
//!     produced.
//!
//!     The structured-text format is best-effort on the way in (it never
//!     fails, see strux-parser) and unquoted on the way out, so only "safe"
//!     documents round-trip exactly. JSON is strict in both directions.
//! ```

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;

use strux_parser::Value;

/// Convert source text from one registered format to another.
///
/// Fails without producing output if the source format cannot parse the
/// input or either format name is unknown.
pub fn convert(
    registry: &FormatRegistry,
    source: &str,
    from: &str,
    to: &str,
) -> Result<String, FormatError> {
    let doc: Value = registry.parse(source, from)?;
    registry.serialize(&doc, to)
}

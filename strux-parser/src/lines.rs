//! Line scanning and classification for the structured-text notation

/// How a line participates in the document, decided from its trimmed
/// content.
///
/// Classification is ordered: blank, comment, mapping entry (contains a
/// colon), sequence item (starts with `- `), bare. A sequence item whose
/// payload contains a colon therefore classifies as a mapping entry; that
/// ordering is part of the notation's observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    MappingEntry,
    SequenceItem,
    /// Content with neither colon nor dash marker; skipped by the parser.
    Bare,
}

/// A single scanned input line.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// Count of leading whitespace characters on the raw line.
    pub indent: usize,
    /// The line with surrounding whitespace removed.
    pub content: &'a str,
    pub kind: LineKind,
}

/// Scan input into classified lines. Nothing is discarded here; the parser
/// decides what to skip.
pub fn scan(input: &str) -> Vec<Line<'_>> {
    input.lines().map(classify).collect()
}

fn classify(raw: &str) -> Line<'_> {
    let content = raw.trim();
    let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
    let kind = if content.is_empty() {
        LineKind::Blank
    } else if content.starts_with('#') {
        LineKind::Comment
    } else if content.contains(':') {
        LineKind::MappingEntry
    } else if content.starts_with("- ") {
        LineKind::SequenceItem
    } else {
        LineKind::Bare
    };
    Line {
        indent,
        content,
        kind,
    }
}

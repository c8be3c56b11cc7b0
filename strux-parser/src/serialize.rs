//! Renderer from a document tree to the structured-text notation

use crate::document::Value;
use crate::scalar::render_inline;

/// Render a document tree as structured text.
///
/// `indent_width` is the number of spaces per nesting level (values below 1
/// are clamped to 1). Mapping keys render in insertion order, so the same
/// document always serializes identically.
///
/// Scalars are rendered unquoted; empty containers render inline as `[]` or
/// `{}`. A container nested directly in a sequence renders inline after the
/// `- ` marker on its first line, and its own children indent by twice the
/// indent width relative to the marker.
pub fn to_structured_text(doc: &Value, indent_width: usize) -> String {
    let width = indent_width.max(1);
    let mut lines = Vec::new();
    match doc {
        Value::Mapping(map) if !map.is_empty() => {
            render_mapping(doc, 0, width, &mut lines);
        }
        Value::Sequence(items) if !items.is_empty() => {
            render_sequence(doc, 0, width, &mut lines);
        }
        other => lines.push(render_inline(other)),
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_mapping(value: &Value, indent: usize, width: usize, out: &mut Vec<String>) {
    let Value::Mapping(map) = value else { return };
    let pad = " ".repeat(indent);
    for (key, child) in map.iter() {
        if child.is_nonempty_container() {
            out.push(format!("{pad}{key}:"));
            render_container(child, indent + width, width, out);
        } else {
            out.push(format!("{pad}{key}: {}", render_inline(child)));
        }
    }
}

fn render_sequence(value: &Value, indent: usize, width: usize, out: &mut Vec<String>) {
    let Value::Sequence(items) = value else { return };
    let pad = " ".repeat(indent);
    for item in items {
        if item.is_nonempty_container() {
            // Inline the container's first line after the dash; its
            // remaining lines keep the deeper indent.
            let mut nested = Vec::new();
            render_container(item, indent + 2 * width, width, &mut nested);
            let mut first = true;
            for line in nested {
                if first {
                    out.push(format!("{pad}- {}", line.trim_start()));
                    first = false;
                } else {
                    out.push(line);
                }
            }
        } else {
            out.push(format!("{pad}- {}", render_inline(item)));
        }
    }
}

fn render_container(value: &Value, indent: usize, width: usize, out: &mut Vec<String>) {
    match value {
        Value::Mapping(_) => render_mapping(value, indent, width, out),
        Value::Sequence(_) => render_sequence(value, indent, width, out),
        _ => {}
    }
}

//! Indentation-driven parser for the structured-text notation

use crate::document::{Mapping, Value};
use crate::lines::{scan, LineKind};
use crate::scalar::coerce_scalar;

/// Sentinel indent for the root frame, below any real line.
const ROOT_INDENT: isize = -1;

/// A container still being filled, plus the indent of the line that
/// opened it. Children must indent further than `indent` to be recognized
/// as members.
struct Frame {
    container: Container,
    indent: isize,
    /// Key in the parent mapping this container is written back to on pop.
    /// `None` only for the root frame.
    slot: Option<String>,
}

enum Container {
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl Container {
    fn into_value(self) -> Value {
        match self {
            Container::Mapping(map) => Value::Mapping(map),
            Container::Sequence(items) => Value::Sequence(items),
        }
    }
}

/// Parse structured text into a document tree.
///
/// Blank lines and `#` comments are discarded. Nesting is tracked purely by
/// indentation: a frame closes as soon as a line's indent drops to or below
/// the indent of the line that opened it.
///
/// This parser is best-effort by design and never fails. Inconsistent
/// indentation silently produces a differently shaped tree, a `- ` item with
/// no sequence to land in is silently dropped, and lines with neither a
/// colon nor a `- ` marker are skipped. Empty input yields an empty mapping.
pub fn parse_structured_text(input: &str) -> Value {
    let mut stack = vec![Frame {
        container: Container::Mapping(Mapping::new()),
        indent: ROOT_INDENT,
        slot: None,
    }];

    for line in scan(input) {
        if matches!(
            line.kind,
            LineKind::Blank | LineKind::Comment | LineKind::Bare
        ) {
            continue;
        }

        let indent = line.indent as isize;
        while stack.len() > 1 && indent <= top(&stack).indent {
            pop_frame(&mut stack);
        }

        match line.kind {
            LineKind::MappingEntry => {
                let Some((raw_key, raw_value)) = line.content.split_once(':') else {
                    continue;
                };
                let key = raw_key.trim().to_string();
                let raw_value = raw_value.trim();

                let Container::Mapping(current) = &mut top_mut(&mut stack).container else {
                    // A `key: value` line inside an open sequence has no
                    // mapping to land in; dropped like an orphaned item.
                    continue;
                };

                match raw_value {
                    "[]" => current.insert(key, Value::Sequence(Vec::new())),
                    "" | "{}" => stack.push(Frame {
                        container: Container::Mapping(Mapping::new()),
                        indent,
                        slot: Some(key),
                    }),
                    scalar => current.insert(key, coerce_scalar(scalar)),
                }
            }
            LineKind::SequenceItem => {
                let item = coerce_scalar(&line.content[2..]);
                push_item(&mut stack, item);
            }
            _ => {}
        }
    }

    while stack.len() > 1 {
        pop_frame(&mut stack);
    }
    match stack.pop() {
        Some(root) => root.container.into_value(),
        None => Value::Mapping(Mapping::new()),
    }
}

/// Place a sequence item relative to the current frame:
///
/// - an open sequence frame takes it directly;
/// - a still-empty mapping frame opened by a bare `key:` line is retyped to
///   a sequence (this is how `key:` followed by `- item` lines becomes a
///   list);
/// - otherwise it lands in the sequence already bound to the most recently
///   inserted key of the current mapping (the `key: []` case);
/// - failing all of those, the item is dropped silently.
fn push_item(stack: &mut Vec<Frame>, item: Value) {
    let keyed = top(stack).slot.is_some();
    let frame = top_mut(stack);
    match &mut frame.container {
        Container::Sequence(items) => items.push(item),
        Container::Mapping(map) => {
            if map.is_empty() && keyed {
                frame.container = Container::Sequence(vec![item]);
            } else if let Some(Value::Sequence(items)) = map.last_value_mut() {
                items.push(item);
            }
        }
    }
}

/// Close the top frame, writing its container back into the parent slot.
fn pop_frame(stack: &mut Vec<Frame>) {
    let Some(frame) = stack.pop() else { return };
    let value = frame.container.into_value();
    if let (Some(key), Some(parent)) = (frame.slot, stack.last_mut()) {
        match &mut parent.container {
            Container::Mapping(map) => map.insert(key, value),
            // Keyed frames are only ever pushed from mapping frames.
            Container::Sequence(_) => {}
        }
    }
}

fn top(stack: &[Frame]) -> &Frame {
    &stack[stack.len() - 1]
}

fn top_mut(stack: &mut [Frame]) -> &mut Frame {
    let last = stack.len() - 1;
    &mut stack[last]
}

//! Behavioral tests for the structured-text parser
//!
//! The parser is best-effort by design: these tests pin both the happy
//! paths and the documented rough edges (silent drops, indentation drift).

use strux_parser::{parse_structured_text, Mapping, Number, Value};

fn mapping(entries: Vec<(&str, Value)>) -> Value {
    Value::Mapping(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

#[test]
fn nested_mappings_close_on_dedent() {
    let doc = parse_structured_text(
        "address:\n  city: NY\n  zip: 10001\nname: John\n",
    );
    assert_eq!(
        doc,
        mapping(vec![
            (
                "address",
                mapping(vec![
                    ("city", Value::String("NY".to_string())),
                    ("zip", Value::Number(Number::from(10001))),
                ])
            ),
            ("name", Value::String("John".to_string())),
        ])
    );
}

#[test]
fn deep_nesting_closes_multiple_frames_at_once() {
    let doc = parse_structured_text(
        "a:\n  b:\n    c: 1\nd: 2\n",
    );
    assert_eq!(
        doc,
        mapping(vec![
            (
                "a",
                mapping(vec![(
                    "b",
                    mapping(vec![("c", Value::Number(Number::from(1)))])
                )])
            ),
            ("d", Value::Number(Number::from(2))),
        ])
    );
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let noisy = "# header comment\n\nname: John\n\n  # indented comment\nage: 30\n\n";
    let clean = "name: John\nage: 30\n";
    assert_eq!(parse_structured_text(noisy), parse_structured_text(clean));
}

#[test]
fn duplicate_keys_overwrite_keeping_position() {
    let doc = parse_structured_text("a: 1\nb: 2\na: 3\n");
    let Value::Mapping(map) = &doc else {
        panic!("expected mapping")
    };
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map.get("a"), Some(&Value::Number(Number::from(3))));
}

#[test]
fn empty_value_with_no_children_becomes_empty_mapping() {
    let doc = parse_structured_text("meta:\nname: x\n");
    assert_eq!(
        doc,
        mapping(vec![
            ("meta", Value::Mapping(Mapping::new())),
            ("name", Value::String("x".to_string())),
        ])
    );
}

#[test]
fn trailing_open_frames_are_closed_at_end_of_input() {
    let doc = parse_structured_text("outer:\n  inner:\n    leaf: true");
    assert_eq!(
        doc,
        mapping(vec![(
            "outer",
            mapping(vec![("inner", mapping(vec![("leaf", Value::Bool(true))]))])
        )])
    );
}

#[test]
fn orphaned_sequence_item_is_dropped_silently() {
    // The last key holds a scalar, so the dash line has nowhere to go.
    let doc = parse_structured_text("a: 1\n- x\n");
    assert_eq!(doc, mapping(vec![("a", Value::Number(Number::from(1)))]));
}

#[test]
fn sequence_item_before_any_key_is_dropped_silently() {
    let doc = parse_structured_text("- x\n- y\n");
    assert_eq!(doc, Value::Mapping(Mapping::new()));
}

#[test]
fn malformed_indentation_still_produces_a_tree() {
    // The sibling dedents below the first child but stays past the parent
    // key, so it is swallowed by the parent frame instead of raising.
    let doc = parse_structured_text("parent:\n    a: 1\n b: 2\n");
    assert_eq!(
        doc,
        mapping(vec![(
            "parent",
            mapping(vec![
                ("a", Value::Number(Number::from(1))),
                ("b", Value::Number(Number::from(2))),
            ])
        )])
    );
}

#[test]
fn misaligned_sibling_changes_tree_shape_without_error() {
    // One extra space keeps the second key inside the child frame.
    let doc = parse_structured_text("parent:\n  a: 1\n   b: 2\n");
    assert_eq!(
        doc,
        mapping(vec![(
            "parent",
            mapping(vec![
                ("a", Value::Number(Number::from(1))),
                ("b", Value::Number(Number::from(2))),
            ])
        )])
    );
}

#[test]
fn bare_lines_are_skipped() {
    let doc = parse_structured_text("stray words\nname: x\n");
    assert_eq!(doc, mapping(vec![("name", Value::String("x".to_string()))]));
}

#[test]
fn colon_heavy_values_keep_everything_after_first_colon() {
    let doc = parse_structured_text("when: 12:30:45\n");
    assert_eq!(
        doc,
        mapping(vec![("when", Value::String("12:30:45".to_string()))])
    );
}

#[test]
fn sibling_sequences_under_one_parent() {
    let doc = parse_structured_text(
        "fruit:\n  - apple\n  - pear\nveg: []\n  - leek\n",
    );
    assert_eq!(
        doc,
        mapping(vec![
            (
                "fruit",
                Value::Sequence(vec![
                    Value::String("apple".to_string()),
                    Value::String("pear".to_string()),
                ])
            ),
            (
                "veg",
                Value::Sequence(vec![Value::String("leek".to_string())])
            ),
        ])
    );
}

#[test]
fn mapping_entry_inside_open_sequence_is_dropped() {
    let doc = parse_structured_text("items:\n  - a\n  k: v\n");
    assert_eq!(
        doc,
        mapping(vec![(
            "items",
            Value::Sequence(vec![Value::String("a".to_string())])
        )])
    );
}

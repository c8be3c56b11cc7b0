//! Round-trip properties between JSON and structured text
//!
//! "Safe" inputs (booleans, nulls, numbers, and strings free of
//! colon/dash/whitespace ambiguity) must survive
//! JSON -> structured text -> JSON unchanged. String/number coercion loss
//! is pinned explicitly rather than papered over.

use proptest::prelude::*;
use strux_parser::{
    doc_to_json, json_to_doc, parse_structured_text, to_structured_text, Mapping, Number, Value,
};

fn round_trip(doc: &Value) -> Value {
    parse_structured_text(&to_structured_text(doc, 2))
}

#[test]
fn flat_json_object_round_trips() {
    let doc = json_to_doc(r#"{"name":"John","age":30,"active":true}"#).unwrap();
    let text = to_structured_text(&doc, 2);
    assert_eq!(text, "name: John\nage: 30\nactive: true\n");
    assert_eq!(round_trip(&doc), doc);
}

#[test]
fn empty_sequence_round_trips() {
    let doc = json_to_doc(r#"{"tags":[]}"#).unwrap();
    let text = to_structured_text(&doc, 2);
    assert_eq!(text, "tags: []\n");
    assert_eq!(round_trip(&doc), doc);
}

#[test]
fn nested_mapping_round_trips_with_numeric_coercion() {
    // "10001" serializes unquoted and is re-coerced to a number on the way
    // back: a deliberate, lossy property of the notation.
    let doc = json_to_doc(r#"{"address":{"city":"NY","zip":"10001"}}"#).unwrap();
    let text = to_structured_text(&doc, 2);
    assert_eq!(text, "address:\n  city: NY\n  zip: 10001\n");

    let back = round_trip(&doc);
    let Value::Mapping(root) = &back else {
        panic!("expected mapping")
    };
    let Some(Value::Mapping(address)) = root.get("address") else {
        panic!("expected nested mapping")
    };
    assert_eq!(address.get("city"), Some(&Value::String("NY".to_string())));
    assert_eq!(
        address.get("zip"),
        Some(&Value::Number(Number::from(10001)))
    );
}

#[test]
fn scalar_sequence_round_trips() {
    let doc = json_to_doc(r#"{"hobbies":["a","b"]}"#).unwrap();
    let text = to_structured_text(&doc, 2);
    assert_eq!(text, "hobbies:\n  - a\n  - b\n");
    assert_eq!(round_trip(&doc), doc);
}

#[test]
fn mixed_safe_document_round_trips_to_equal_json() {
    let source = r#"{"name":"John","age":30,"active":true,"nick":null,"tags":[],"pets":["cat","dog"],"home":{"city":"NY"}}"#;
    let doc = json_to_doc(source).unwrap();
    let back = round_trip(&doc);
    assert_eq!(back, doc);

    // And the full JSON -> text -> JSON trip is deep-equal.
    let json = doc_to_json(&back, 2);
    assert_eq!(json_to_doc(&json).unwrap(), doc);
}

#[test]
fn structured_text_to_json_direction() {
    let doc = parse_structured_text("name: John\nactive: true\nage: 30\n");
    let json = doc_to_json(&doc, 2);
    assert_eq!(
        json,
        "{\n  \"name\": \"John\",\n  \"active\": true,\n  \"age\": 30\n}"
    );
}

#[test]
fn key_order_survives_both_directions() {
    let doc = json_to_doc(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
    let text = to_structured_text(&doc, 2);
    assert_eq!(text, "zeta: 1\nalpha: 2\nmid: 3\n");

    let back = round_trip(&doc);
    let Value::Mapping(map) = &back else {
        panic!("expected mapping")
    };
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

/// Strings that neither collide with literals nor coerce to numbers.
fn safe_string() -> impl Strategy<Value = String> {
    "[a-z][a-z ]{0,10}[a-z]".prop_filter("reserved literals coerce on re-parse", |s| {
        s.as_str() != "true" && s.as_str() != "false" && s.as_str() != "null"
    })
}

fn safe_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::from(n))),
        safe_string().prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn safe_scalar_mappings_round_trip(
        entries in prop::collection::vec((safe_string(), safe_scalar()), 1..8)
    ) {
        let map: Mapping = entries.into_iter().collect();
        let doc = Value::Mapping(map);
        prop_assert_eq!(round_trip(&doc), doc);
    }

    #[test]
    fn safe_scalar_sequences_round_trip(
        items in prop::collection::vec(safe_scalar(), 1..8)
    ) {
        let mut map = Mapping::new();
        map.insert("items".to_string(), Value::Sequence(items));
        let doc = Value::Mapping(map);
        prop_assert_eq!(round_trip(&doc), doc);
    }
}

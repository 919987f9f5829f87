//! Property-based tests for pointer encoding and document walking
//!
//! These tests verify that escaping, parsing and walking agree with each
//! other across a wide range of keys and document shapes.

use datadesc_core::{escape_segment, unescape_segment, Document, Pointer};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Keys biased towards the characters that need escaping
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_]{1,12}",
        "[a-z~/]{1,8}",
        "[~/01]{1,6}",
    ]
}

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        4,  // max depth
        32, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                proptest::collection::btree_map(key_strategy(), inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Every (pointer, value) pair reachable from `value`
fn reachable(value: &Value, prefix: Pointer, out: &mut Vec<(Pointer, Value)>) {
    out.push((prefix.clone(), value.clone()));
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let mut next = prefix.clone();
                next.push(key.clone());
                reachable(child, next, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let mut next = prefix.clone();
                next.push(index.to_string());
                reachable(child, next, out);
            }
        }
        _ => {}
    }
}

proptest! {
    #[test]
    fn prop_unescape_inverts_escape(key in ".*") {
        prop_assert_eq!(unescape_segment(&escape_segment(&key)), key);
    }

    #[test]
    fn prop_escaped_segments_have_no_slash(key in ".*") {
        prop_assert!(!escape_segment(&key).contains('/'));
    }

    #[test]
    fn prop_display_parses_back(keys in proptest::collection::vec(key_strategy(), 0..6)) {
        let pointer = Pointer::from_segments(keys);
        prop_assert_eq!(Pointer::parse(&pointer.to_string()), pointer.clone());
        prop_assert!(Pointer::validate(&pointer.to_string()).is_ok());
    }

    #[test]
    fn prop_every_reachable_value_resolves(value in json_value_strategy()) {
        let mut pairs = Vec::new();
        reachable(&value, Pointer::root(), &mut pairs);
        let document = Document::new(value.clone());

        for (pointer, expected) in pairs {
            prop_assert_eq!(pointer.walk(&value).unwrap(), &expected);
            prop_assert_eq!(document.resolve(&format!("#{pointer}")).unwrap(), expected);
        }
    }

    #[test]
    fn prop_missing_key_reports_consumed_prefix(
        keys in proptest::collection::vec("[a-z]{1,6}", 1..5),
        missing in "[A-Z]{1,6}",
    ) {
        let mut value = json!({});
        for key in keys.iter().rev() {
            let mut map = serde_json::Map::new();
            map.insert(key.clone(), value);
            value = Value::Object(map);
        }

        let mut segments = keys.clone();
        segments.push(missing.clone());
        let err = Pointer::from_segments(segments).walk(&value).unwrap_err();

        match err {
            datadesc_core::Error::ReferenceNotFound { segment, consumed, .. } => {
                prop_assert_eq!(segment, missing);
                prop_assert_eq!(consumed, Pointer::from_segments(keys).to_string());
            }
            other => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    #[test]
    fn prop_out_of_range_index_fails(len in 0usize..8, extra in 0usize..4) {
        let value = Value::Array((0..len).map(|i| json!(i)).collect());
        let pointer = Pointer::from_segments([(len + extra).to_string()]);
        prop_assert!(pointer.walk(&value).is_err());
    }
}

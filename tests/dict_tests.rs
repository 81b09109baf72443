//! Integration tests for the insertion-ordered `Dict`.

use rstest::rstest;
use std::rc::Rc;
use std::sync::Arc;
use traverso::dict;
use traverso::dict::Dict;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_and_default_are_empty() {
    let created: Dict<String, i32> = Dict::new();
    let defaulted: Dict<String, i32> = Dict::default();
    let literal: Dict<String, i32> = dict! {};

    assert!(created.is_empty());
    assert_eq!(created, defaulted);
    assert_eq!(defaulted, literal);
}

#[rstest]
fn test_with_capacity_starts_empty() {
    let dict: Dict<u64, u64> = Dict::with_capacity(64);
    assert_eq!(dict.len(), 0);
    assert_eq!(dict.first(), None);
}

#[rstest]
fn test_literal_accepts_trailing_comma() {
    let dict = dict! {
        "alpha" => 1,
        "beta" => 2,
    };
    assert_eq!(dict.len(), 2);
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn test_iteration_follows_insertion_not_hash_order() {
    let mut dict = Dict::new();
    for key in [50, 3, 41, 7, 19] {
        dict.insert(key, key * 2);
    }
    let keys: Vec<i32> = dict.keys().copied().collect();
    assert_eq!(keys, vec![50, 3, 41, 7, 19]);
}

#[rstest]
fn test_overwrite_keeps_position() {
    let mut dict = dict! { 'a' => 1, 'b' => 2, 'c' => 3 };
    assert_eq!(dict.insert('a', 10), Some(1));

    let entries: Vec<(char, i32)> = dict.into_iter().collect();
    assert_eq!(entries, vec![('a', 10), ('b', 2), ('c', 3)]);
}

#[rstest]
fn test_insert_if_absent_ignores_existing() {
    let mut dict = dict! { "k" => 1 };
    assert!(!dict.insert_if_absent("k", 2));
    assert!(dict.insert_if_absent("j", 3));
    assert_eq!(dict, dict! { "k" => 1, "j" => 3 });
}

#[rstest]
fn test_equality_is_order_sensitive() {
    assert_ne!(dict! { 1 => 'a', 2 => 'b' }, dict! { 2 => 'b', 1 => 'a' });
}

#[rstest]
fn test_pop_removes_last_inserted() {
    let mut dict = dict! { "first" => 1, "second" => 2 };
    assert_eq!(dict.pop(), Some(("second", 2)));
    assert!(!dict.contains_key("second"));

    dict.insert("second", 20);
    assert_eq!(dict.last(), Some((&"second", &20)));
}

#[rstest]
fn test_get_index() {
    let dict = dict! { "x" => 'x', "y" => 'y' };
    assert_eq!(dict.get_index(1), Some((&"y", &'y')));
    assert_eq!(dict.get_index(2), None);
}

// =============================================================================
// Lookup
// =============================================================================

#[rstest]
fn test_lookup_with_borrowed_key() {
    let mut dict: Dict<String, Vec<u8>> = Dict::new();
    dict.insert("bytes".to_string(), vec![1]);

    assert!(dict.contains_key("bytes"));
    assert_eq!(dict.get("bytes"), Some(&vec![1]));

    if let Some(bytes) = dict.get_mut("bytes") {
        bytes.push(2);
    }
    assert_eq!(dict.get("bytes"), Some(&vec![1, 2]));
    assert_eq!(dict.get("missing"), None);
}

#[rstest]
fn test_shared_string_keys() {
    let rc: Dict<Rc<str>, i32> = dict! { Rc::from("a") => 1 };
    let arc: Dict<Arc<str>, i32> = dict! { Arc::from("a") => 1 };
    assert_eq!(rc.get("a"), Some(&1));
    assert_eq!(arc.get("a"), Some(&1));
}

// =============================================================================
// Iterators
// =============================================================================

#[rstest]
fn test_iterators_are_exact_size_and_double_ended() {
    let dict = dict! { 1 => "one", 2 => "two", 3 => "three" };

    assert_eq!(dict.iter().len(), 3);
    assert_eq!(dict.values().rev().copied().collect::<Vec<_>>(), vec!["three", "two", "one"]);
    assert_eq!(dict.keys().last(), Some(&3));

    let owned_keys: Vec<i32> = dict.clone().into_keys().collect();
    let owned_values: Vec<&str> = dict.into_values().collect();
    assert_eq!(owned_keys, vec![1, 2, 3]);
    assert_eq!(owned_values, vec!["one", "two", "three"]);
}

#[rstest]
fn test_extend_and_borrowed_into_iter() {
    let mut dict = dict! { "a" => 1 };
    dict.extend([("b", 2), ("a", 3)]);

    let mut seen = Vec::new();
    for (key, value) in &dict {
        seen.push(format!("{key}={value}"));
    }
    assert_eq!(seen, vec!["a=3", "b=2"]);
}

#[rstest]
fn test_debug_renders_as_map() {
    let dict = dict! { "z" => 1, "a" => 2 };
    assert_eq!(format!("{dict:?}"), r#"{"z": 1, "a": 2}"#);
}

// =============================================================================
// serde
// =============================================================================

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[rstest]
    fn test_serializes_in_insertion_order() {
        let dict = dict! { "zeta".to_string() => 1, "alpha".to_string() => 2 };
        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[rstest]
    fn test_deserializes_preserving_document_order() {
        let dict: Dict<String, i32> = serde_json::from_str(r#"{"b":1,"a":2,"c":3}"#).unwrap();
        let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}

//! Integration tests for input classification.

use rstest::rstest;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use traverso::dict;
use traverso::traversable::{KeyedTraversable, Shape, Traversable, classify, entries, iterable};

// =============================================================================
// classify
// =============================================================================

#[rstest]
fn test_indexed_inputs() {
    let vector = vec![1, 2];
    let array = [1, 2];
    let deque = VecDeque::from([1, 2]);

    assert_eq!(classify(&vector), Shape::Indexed);
    assert_eq!(classify(&vector.as_slice()), Shape::Indexed);
    assert_eq!(classify(&array), Shape::Indexed);
    assert_eq!(classify(&deque), Shape::Indexed);
    assert_eq!(classify(&Some(1)), Shape::Indexed);
}

#[rstest]
fn test_keyed_inputs() {
    assert_eq!(classify(&dict! { 1 => 1 }), Shape::Keyed);
    assert_eq!(classify(&BTreeMap::from([(1, 1)])), Shape::Keyed);
    assert_eq!(classify(&HashMap::from([(1, 1)])), Shape::Keyed);
    assert_eq!(classify(&BTreeSet::from([1])), Shape::Keyed);
    assert_eq!(classify(&HashSet::from([1])), Shape::Keyed);
}

#[rstest]
fn test_one_pass_inputs() {
    assert_eq!(classify(&iterable(0..3)), Shape::Iterable);
    assert_eq!(classify(&entries([("k", 'v')])), Shape::Iterable);
}

#[rstest]
#[case(Shape::Indexed, true)]
#[case(Shape::Keyed, true)]
#[case(Shape::Iterable, false)]
fn test_known_length_by_shape(#[case] shape: Shape, #[case] expected: bool) {
    assert_eq!(shape.has_known_length(), expected);
}

// =============================================================================
// Length and access
// =============================================================================

#[rstest]
fn test_exact_len_matches_shape() {
    let vector = vec!['a'; 4];
    assert_eq!((&vector).exact_len(), Some(4));
    assert_eq!(dict! { "a" => 1 }.exact_len(), Some(1));
    assert_eq!(iterable(vector.iter()).exact_len(), None);
}

#[rstest]
fn test_last_value_agrees_with_forward_scan() {
    let values = vec![3, 1, 4, 1, 5];
    let scanned = values.iter().last();

    assert_eq!((&values).last_value(), scanned);
    assert_eq!(values.as_slice().last_value(), scanned);
    assert_eq!(iterable(values.iter()).last_value(), scanned);
}

#[rstest]
fn test_entries_of_each_shape() {
    let chars = vec!['a', 'b'];
    let pairs: Vec<(usize, &char)> = (&chars).into_entries().collect();
    assert_eq!(pairs, vec![(0, &'a'), (1, &'b')]);

    let pairs: Vec<(usize, char)> = iterable("ab".chars()).into_entries().collect();
    assert_eq!(pairs, vec![(0, 'a'), (1, 'b')]);

    let pairs: Vec<(&str, i32)> = entries([("x", 1)]).into_entries().collect();
    assert_eq!(pairs, vec![("x", 1)]);

    let values: Vec<i32> = entries([("x", 1), ("y", 2)]).into_values().collect();
    assert_eq!(values, vec![1, 2]);
}

#[rstest]
fn test_owned_dict_last_entry() {
    let dict = dict! { "a" => 1, "b" => 2 };
    assert_eq!(KeyedTraversable::last_entry(dict), Some(("b", 2)));
}

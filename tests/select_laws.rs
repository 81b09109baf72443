#![cfg(feature = "select")]
//! Property-based tests for the selection operations.
//!
//! The optional and failing variants share one implementation, so they
//! must agree on every input, and the constant-time paths must agree with
//! a plain forward scan.

use proptest::prelude::*;
use std::collections::BTreeMap;
use traverso::dict::Dict;
use traverso::select::{
    count, exactly_one_or_fail, first, first_key, first_or_fail, is_empty, last, last_key,
    last_or_fail,
};
use traverso::traversable::iterable;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for generating a Dict from a vector of key-value pairs.
fn arbitrary_dict(max_size: usize) -> impl Strategy<Value = Dict<i16, i32>> {
    prop::collection::vec((any::<i16>(), any::<i32>()), 0..max_size)
        .prop_map(|entries| entries.into_iter().collect::<Dict<i16, i32>>())
}

// =============================================================================
// first / last Laws
// =============================================================================

proptest! {
    /// Law: last of an indexed sequence is its final element.
    /// last(s) == s[len - 1]
    #[test]
    fn prop_last_is_final_element(values in prop::collection::vec(any::<i32>(), 1..50)) {
        let expected = values[values.len() - 1];
        prop_assert_eq!(last(&values), Some(&expected));
        prop_assert_eq!(last_or_fail(&values), Ok(&expected));
    }

    /// Law: the optional and failing variants agree.
    /// first(s) == first_or_fail(s).ok()
    #[test]
    fn prop_or_fail_parity(values in prop::collection::vec(any::<u8>(), 0..10)) {
        prop_assert_eq!(first(&values), first_or_fail(&values).ok());
        prop_assert_eq!(last(&values), last_or_fail(&values).ok());
        prop_assert_eq!(first_or_fail(&values).is_err(), values.is_empty());
    }

    /// Law: the constant-time last agrees with a one-pass scan.
    /// last(s) == last(iterable(s))
    #[test]
    fn prop_last_shapes_agree(values in prop::collection::vec(any::<i64>(), 0..50)) {
        prop_assert_eq!(last(values.clone()), last(iterable(values.clone())));
        prop_assert_eq!(last_key(&values), last_key(iterable(values.iter())));
    }
}

// =============================================================================
// Keyed Laws
// =============================================================================

proptest! {
    /// Law: last_key of a Dict is the most recently inserted new key.
    #[test]
    fn prop_dict_last_key_is_last_new_key(dict in arbitrary_dict(30)) {
        prop_assert_eq!(last_key(&dict), dict.keys().last());
        prop_assert_eq!(first_key(&dict), dict.keys().next());
    }

    /// Law: last_key of a BTreeMap is its greatest key.
    #[test]
    fn prop_btree_last_key_is_max(
        entries in prop::collection::vec((any::<i32>(), any::<u8>()), 0..30)
    ) {
        let map: BTreeMap<i32, u8> = entries.into_iter().collect();
        prop_assert_eq!(last_key(&map), map.keys().max());
    }
}

// =============================================================================
// Cardinality Laws
// =============================================================================

proptest! {
    /// Law: exactly_one_or_fail succeeds iff the input has one element.
    #[test]
    fn prop_exactly_one_iff_single(values in prop::collection::vec(any::<i32>(), 0..5)) {
        let result = exactly_one_or_fail(iterable(values.iter()), None);
        prop_assert_eq!(result.is_ok(), values.len() == 1);
    }

    /// Law: count and is_empty agree across shapes.
    #[test]
    fn prop_count_shapes_agree(values in prop::collection::vec(any::<u16>(), 0..40)) {
        prop_assert_eq!(count(&values), count(iterable(values.iter())));
        prop_assert_eq!(is_empty(&values), count(&values) == 0);
    }
}

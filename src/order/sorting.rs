//! Stable sorting of materialized inputs.

use crate::traversable::{Traversable, dispatch};
use std::cmp::Ordering;

/// Returns the values sorted by their natural order.
///
/// The sort is stable: equal values keep their input order.
///
/// # Examples
///
/// ```rust
/// use traverso::order::sort;
///
/// assert_eq!(sort(vec!["the", "quick", "brown", "fox"]), vec!["brown", "fox", "quick", "the"]);
/// ```
pub fn sort<T>(input: T) -> Vec<T::Value>
where
    T: Traversable,
    T::Value: Ord,
{
    sort_with(input, Ord::cmp)
}

/// Returns the values sorted by `comparator`.
///
/// The sort is stable. `comparator` should describe a total order; an
/// inconsistent comparator produces an unspecified order but never panics.
///
/// # Examples
///
/// ```rust
/// use traverso::order::sort_with;
///
/// let readings = vec![1.0, 1.2, -5.7, -5.8];
/// assert_eq!(sort_with(readings, f64::total_cmp), vec![-5.8, -5.7, 1.0, 1.2]);
///
/// let by_second_letter = sort_with(["the", "quick", "brown", "fox"], |left, right| {
///     left.as_bytes()[1].cmp(&right.as_bytes()[1])
/// });
/// assert_eq!(by_second_letter, ["the", "fox", "brown", "quick"]);
/// ```
pub fn sort_with<T, C>(input: T, mut comparator: C) -> Vec<T::Value>
where
    T: Traversable,
    C: FnMut(&T::Value, &T::Value) -> Ordering,
{
    dispatch(&input, "sort");
    let mut values: Vec<T::Value> = input.into_values().collect();
    values.sort_by(|left, right| comparator(left, right));
    values
}

/// Returns the values sorted by the natural order of `key_fn(value)`.
///
/// `key_fn` runs exactly once per value; the derived keys are stored next to
/// their values for the duration of the sort. Values with equal keys keep
/// their input order.
///
/// # Examples
///
/// ```rust
/// use traverso::order::sort_by;
///
/// let words = vec!["the", "quick", "brown", "fox", "jumped", "over"];
/// assert_eq!(
///     sort_by(words, |word| word.len()),
///     vec!["the", "fox", "over", "quick", "brown", "jumped"]
/// );
/// ```
pub fn sort_by<T, F, S>(input: T, key_fn: F) -> Vec<T::Value>
where
    T: Traversable,
    F: FnMut(&T::Value) -> S,
    S: Ord,
{
    sort_by_with(input, key_fn, Ord::cmp)
}

/// Returns the values sorted by `comparator` applied to `key_fn(value)`.
///
/// Same guarantees as [`sort_by`].
///
/// # Examples
///
/// ```rust
/// use traverso::order::sort_by_with;
///
/// let reversed = |word: &&str| word.chars().rev().collect::<String>();
/// let words = ["the", "quick", "brown", "fox", "jumped"];
///
/// assert_eq!(
///     sort_by_with(words, reversed, |left, right| right.cmp(left)),
///     ["fox", "brown", "quick", "the", "jumped"]
/// );
/// ```
pub fn sort_by_with<T, F, S, C>(input: T, mut key_fn: F, mut comparator: C) -> Vec<T::Value>
where
    T: Traversable,
    F: FnMut(&T::Value) -> S,
    C: FnMut(&S, &S) -> Ordering,
{
    dispatch(&input, "sort_by");
    let mut decorated: Vec<(S, T::Value)> = input
        .into_values()
        .map(|value| (key_fn(&value), value))
        .collect();
    decorated.sort_by(|(left, _), (right, _)| comparator(left, right));
    decorated.into_iter().map(|(_, value)| value).collect()
}

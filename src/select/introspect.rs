//! Size and membership queries.

use crate::traversable::{KeyedTraversable, Traversable, dispatch};
use std::borrow::Borrow;

/// Returns the number of values.
///
/// Constant time for inputs that know their length; one-pass iterables are
/// walked to the end.
///
/// # Examples
///
/// ```rust
/// use traverso::select::count;
/// use traverso::traversable::iterable;
///
/// assert_eq!(count(&vec![1, 2, 3]), 3);
/// assert_eq!(count(iterable("a-b-c".split('-'))), 3);
/// ```
pub fn count<T: Traversable>(input: T) -> usize {
    dispatch(&input, "count");
    match input.exact_len() {
        Some(length) => length,
        None => input.into_values().count(),
    }
}

/// Returns `true` if the input has no values.
///
/// Never pulls more than one value from a one-pass iterable.
///
/// # Examples
///
/// ```rust
/// use traverso::select::is_empty;
/// use traverso::traversable::iterable;
///
/// assert!(is_empty(Vec::<i32>::new()));
/// assert!(!is_empty(iterable(0..)));
/// ```
pub fn is_empty<T: Traversable>(input: T) -> bool {
    dispatch(&input, "is_empty");
    match input.exact_len() {
        Some(length) => length == 0,
        None => input.into_values().next().is_none(),
    }
}

/// Returns `true` if any value equals `value`.
///
/// # Examples
///
/// ```rust
/// use traverso::select::contains;
///
/// let names = vec!["ada".to_string(), "grace".to_string()];
/// assert!(contains(names.clone(), "grace"));
/// assert!(!contains(&names, &"alan".to_string()));
/// ```
pub fn contains<T, Q>(input: T, value: &Q) -> bool
where
    T: Traversable,
    T::Value: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    dispatch(&input, "contains");
    input
        .into_values()
        .any(|candidate| candidate.borrow() == value)
}

/// Returns `true` if any key equals `key`.
///
/// This walks the keys in order; a [`Dict`](crate::dict::Dict) answers the
/// same question in constant time with
/// [`Dict::contains_key`](crate::dict::Dict::contains_key).
///
/// # Examples
///
/// ```rust
/// use traverso::select::contains_key;
///
/// assert!(contains_key(&vec!['a', 'b'], &1));
/// assert!(!contains_key(&vec!['a', 'b'], &2));
/// ```
pub fn contains_key<T, Q>(input: T, key: &Q) -> bool
where
    T: KeyedTraversable,
    T::Key: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    dispatch(&input, "contains_key");
    input
        .into_entries()
        .any(|(candidate, _)| candidate.borrow() == key)
}

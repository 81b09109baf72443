//! Selecting single elements: `find`, `first`, `last` and `exactly_one`.

use crate::invariant::{PreconditionFailed, Result, Violation, fail, require};
use crate::traversable::{KeyedTraversable, Traversable, dispatch};
use std::fmt;

/// Returns the first value for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use traverso::select::find;
///
/// let words = vec!["apple", "banana", "cherry"];
/// assert_eq!(find(&words, |word| word.starts_with('b')), Some(&"banana"));
/// assert_eq!(find(&words, |word| word.is_empty()), None);
/// ```
pub fn find<T, P>(input: T, predicate: P) -> Option<T::Value>
where
    T: Traversable,
    P: FnMut(&T::Value) -> bool,
{
    dispatch(&input, "find");
    input.into_values().find(predicate)
}

/// Returns the key of the first value for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use traverso::dict;
/// use traverso::select::find_key;
///
/// let stock = dict! { "apples" => 0, "pears" => 4, "plums" => 9 };
/// assert_eq!(find_key(&stock, |count| **count > 0), Some(&"pears"));
///
/// let positions = vec![3, 8, 1];
/// assert_eq!(find_key(&positions, |value| **value > 5), Some(1));
/// ```
pub fn find_key<T, P>(input: T, mut predicate: P) -> Option<T::Key>
where
    T: KeyedTraversable,
    P: FnMut(&T::Value) -> bool,
{
    dispatch(&input, "find_key");
    input
        .into_entries()
        .find(|(_, value)| predicate(value))
        .map(|(key, _)| key)
}

/// Returns the first value, or `None` if the input is empty.
///
/// For non-empty inputs see [`first_or_fail`]; for inputs that may be
/// absent altogether see [`first_from_nullable`]; for single-element inputs
/// see [`exactly_one_or_fail`].
///
/// # Examples
///
/// ```rust
/// use traverso::select::first;
///
/// assert_eq!(first(vec![4, 5, 6]), Some(4));
/// assert_eq!(first(Vec::<i32>::new()), None);
/// ```
pub fn first<T: Traversable>(input: T) -> Option<T::Value> {
    dispatch(&input, "first");
    input.into_values().next()
}

/// Returns the first value, failing if the input is empty.
///
/// # Errors
///
/// Returns [`PreconditionFailed`] with [`Violation::EmptyInput`] when the
/// input has no elements.
///
/// # Examples
///
/// ```rust
/// use traverso::select::first_or_fail;
///
/// assert_eq!(first_or_fail(['x', 'y']), Ok('x'));
/// assert!(first_or_fail(Vec::<char>::new()).is_err());
/// ```
pub fn first_or_fail<T: Traversable>(input: T) -> Result<T::Value> {
    require(first(input), "first_or_fail")
}

/// Returns the first key, or `None` if the input is empty.
///
/// # Examples
///
/// ```rust
/// use traverso::dict;
/// use traverso::select::first_key;
///
/// assert_eq!(first_key(dict! { "b" => 1, "a" => 2 }), Some("b"));
/// assert_eq!(first_key(vec!['q']), Some(0));
/// ```
pub fn first_key<T: KeyedTraversable>(input: T) -> Option<T::Key> {
    dispatch(&input, "first_key");
    input.into_entries().next().map(|(key, _)| key)
}

/// Returns the first key, failing if the input is empty.
///
/// # Errors
///
/// Returns [`PreconditionFailed`] with [`Violation::EmptyInput`] when the
/// input has no elements.
pub fn first_key_or_fail<T: KeyedTraversable>(input: T) -> Result<T::Key> {
    require(first_key(input), "first_key_or_fail")
}

/// Returns the last value, or `None` if the input is empty.
///
/// Indexed sequences and containers with direct access to their last
/// element answer in constant time; one-pass iterables are walked once to
/// the end.
///
/// # Examples
///
/// ```rust
/// use traverso::select::last;
/// use traverso::traversable::iterable;
///
/// assert_eq!(last(&vec![1, 2, 3]), Some(&3));
/// assert_eq!(last(iterable((0..5).map(|number| number * 10))), Some(40));
/// assert_eq!(last(Vec::<u8>::new()), None);
/// ```
pub fn last<T: Traversable>(input: T) -> Option<T::Value> {
    dispatch(&input, "last");
    input.last_value()
}

/// Returns the last value, failing if the input is empty.
///
/// # Errors
///
/// Returns [`PreconditionFailed`] with [`Violation::EmptyInput`] when the
/// input has no elements.
pub fn last_or_fail<T: Traversable>(input: T) -> Result<T::Value> {
    require(last(input), "last_or_fail")
}

/// Returns the last key, or `None` if the input is empty.
///
/// # Examples
///
/// ```rust
/// use traverso::dict;
/// use traverso::select::last_key;
///
/// assert_eq!(last_key(&vec!['a', 'b', 'c']), Some(2));
/// assert_eq!(last_key(dict! { 10 => 'x', 5 => 'y' }), Some(5));
/// ```
pub fn last_key<T: KeyedTraversable>(input: T) -> Option<T::Key> {
    dispatch(&input, "last_key");
    input.last_entry().map(|(key, _)| key)
}

/// Returns the last key, failing if the input is empty.
///
/// # Errors
///
/// Returns [`PreconditionFailed`] with [`Violation::EmptyInput`] when the
/// input has no elements.
pub fn last_key_or_fail<T: KeyedTraversable>(input: T) -> Result<T::Key> {
    require(last_key(input), "last_key_or_fail")
}

/// Returns the first value of an input that may itself be absent.
///
/// An absent input yields `None` without being inspected; a present input
/// behaves like [`first`].
///
/// # Examples
///
/// ```rust
/// use traverso::select::first_from_nullable;
///
/// assert_eq!(first_from_nullable(Some(vec![7, 8])), Some(7));
/// assert_eq!(first_from_nullable(Some(Vec::<i32>::new())), None);
/// assert_eq!(first_from_nullable(None::<Vec<i32>>), None);
/// ```
pub fn first_from_nullable<T: Traversable>(input: Option<T>) -> Option<T::Value> {
    input.and_then(first)
}

/// Returns the only value of the input.
///
/// Traversal stops as soon as a second value is produced, so the input is
/// never buffered. When the input knows its length the failure message
/// reports it.
///
/// `message`, when given, replaces the default failure message; build it
/// with [`format_args!`].
///
/// # Errors
///
/// Returns [`PreconditionFailed`] with
///
/// - [`Violation::EmptyInput`] when the input has no elements;
/// - [`Violation::MoreThanOne`] when it has two or more.
///
/// # Examples
///
/// ```rust
/// use traverso::select::exactly_one_or_fail;
///
/// assert_eq!(exactly_one_or_fail(vec![42], None), Ok(42));
///
/// let error = exactly_one_or_fail(vec![1, 2, 3], None).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "exactly_one_or_fail: expected exactly one element but got 3"
/// );
///
/// let user_id = 7;
/// let error = exactly_one_or_fail(Vec::<u8>::new(), Some(format_args!("no row for user {user_id}")))
///     .unwrap_err();
/// assert_eq!(error.to_string(), "no row for user 7");
/// ```
pub fn exactly_one_or_fail<T: Traversable>(
    input: T,
    message: Option<fmt::Arguments<'_>>,
) -> Result<T::Value> {
    const OPERATION: &str = "exactly_one_or_fail";

    dispatch(&input, OPERATION);
    let count = input.exact_len();
    let mut values = input.into_values();

    let Some(only) = values.next() else {
        return Err(refuse(OPERATION, Violation::EmptyInput, message));
    };
    if values.next().is_some() {
        return Err(refuse(
            OPERATION,
            Violation::MoreThanOne { count },
            message,
        ));
    }
    Ok(only)
}

fn refuse(
    operation: &'static str,
    violation: Violation,
    message: Option<fmt::Arguments<'_>>,
) -> PreconditionFailed {
    let failure = fail(operation, violation);
    match message {
        Some(message) => failure.with_message(message.to_string()),
        None => failure,
    }
}

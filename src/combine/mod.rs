//! Combining keyed inputs into a [`Dict`].
//!
//! - [`associate`] zips a sequence of keys with a sequence of values.
//! - [`merge`] / [`merge_all`] combine keyed inputs where the **last** write
//!   of a key wins (its position is that of its first appearance).
//! - [`union`] combines keyed inputs where the **first** write of a key wins
//!   and later duplicates are ignored entirely.
//! - [`from_entries`] collects `(key, value)` pairs.
//!
//! All results are freshly built dictionaries; no input is modified.
//!
//! # Examples
//!
//! ```rust
//! use traverso::combine::{merge, union};
//! use traverso::dict;
//!
//! let defaults = dict! { "a" => 1, "b" => 2 };
//! let overrides = dict! { "b" => 3, "c" => 4 };
//!
//! assert_eq!(merge(&defaults, [&overrides]), dict! { &"a" => &1, &"b" => &3, &"c" => &4 });
//! assert_eq!(union([&defaults, &overrides]), dict! { &"a" => &1, &"b" => &2, &"c" => &4 });
//! ```

use crate::dict::{ArrayKey, Dict};
use crate::invariant::{Result, Violation, ensure};
use crate::traversable::{KeyedTraversable, Traversable, dispatch};

/// Builds a dictionary mapping `keys[i]` to `values[i]`.
///
/// Both inputs are materialized first; when both know their length up front
/// a mismatch is reported before either is traversed. Duplicate keys keep
/// their first position and take the last value.
///
/// # Errors
///
/// Returns [`PreconditionFailed`](crate::invariant::PreconditionFailed)
/// with [`Violation::LengthMismatch`] when the inputs have different
/// lengths. No partial dictionary is produced.
///
/// # Examples
///
/// ```rust
/// use traverso::combine::associate;
/// use traverso::dict;
///
/// let dict = associate(["x", "y", "z"], [1, 2, 3]).unwrap();
/// assert_eq!(dict, dict! { "x" => 1, "y" => 2, "z" => 3 });
///
/// assert!(associate(["x"], [1, 2]).is_err());
/// ```
pub fn associate<KS, VS>(keys: KS, values: VS) -> Result<Dict<KS::Value, VS::Value>>
where
    KS: Traversable,
    VS: Traversable,
    KS::Value: ArrayKey,
{
    const OPERATION: &str = "associate";

    dispatch(&keys, OPERATION);
    dispatch(&values, OPERATION);
    if let (Some(key_count), Some(value_count)) = (keys.exact_len(), values.exact_len()) {
        ensure(key_count == value_count, OPERATION, || {
            Violation::LengthMismatch {
                keys: key_count,
                values: value_count,
            }
        })?;
    }

    let keys: Vec<KS::Value> = keys.into_values().collect();
    let values: Vec<VS::Value> = values.into_values().collect();
    ensure(keys.len() == values.len(), OPERATION, || {
        Violation::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        }
    })?;

    Ok(keys.into_iter().zip(values).collect())
}

/// Merges `first` with every source in `rest`, later values overwriting
/// earlier ones.
///
/// The result starts with the entries of `first` in order; each new key from
/// `rest` is appended when first seen. A key that appears again keeps its
/// position but takes the newer value.
///
/// # Examples
///
/// ```rust
/// use traverso::combine::merge;
/// use traverso::dict;
///
/// let merged = merge(
///     dict! { "a" => 1, "b" => 2 },
///     [dict! { "b" => 3, "c" => 4 }, dict! { "a" => 5 }],
/// );
/// assert_eq!(merged, dict! { "a" => 5, "b" => 3, "c" => 4 });
/// ```
pub fn merge<F, R>(first: F, rest: R) -> Dict<F::Key, F::Value>
where
    F: KeyedTraversable,
    F::Key: ArrayKey,
    R: IntoIterator,
    R::Item: KeyedTraversable<Key = F::Key, Value = F::Value>,
{
    dispatch(&first, "merge");
    let mut result: Dict<F::Key, F::Value> = first.into_entries().collect();
    for source in rest {
        dispatch(&source, "merge");
        result.extend(source.into_entries());
    }
    result
}

/// Merges every source in order, later values overwriting earlier ones.
///
/// Same semantics as [`merge`]; merging no sources gives an empty
/// dictionary.
///
/// # Examples
///
/// ```rust
/// use traverso::combine::merge_all;
/// use traverso::dict;
/// use traverso::dict::Dict;
///
/// let layers = vec![dict! { 1 => 'a' }, dict! { 1 => 'b', 2 => 'c' }];
/// assert_eq!(merge_all(layers), dict! { 1 => 'b', 2 => 'c' });
///
/// let nothing: Vec<Dict<i32, char>> = Vec::new();
/// assert!(merge_all(nothing).is_empty());
/// ```
pub fn merge_all<R, T>(sources: R) -> Dict<T::Key, T::Value>
where
    R: IntoIterator<Item = T>,
    T: KeyedTraversable,
    T::Key: ArrayKey,
{
    let mut result = Dict::new();
    for source in sources {
        dispatch(&source, "merge_all");
        result.extend(source.into_entries());
    }
    result
}

/// Combines every source in order, keeping the first value seen for each
/// key.
///
/// Later occurrences of a key contribute nothing: neither their value nor
/// their position.
///
/// # Examples
///
/// ```rust
/// use traverso::combine::union;
/// use traverso::dict;
///
/// let combined = union([dict! { "b" => 2 }, dict! { "a" => 1, "b" => 20 }]);
/// assert_eq!(combined, dict! { "b" => 2, "a" => 1 });
/// ```
pub fn union<R, T>(sources: R) -> Dict<T::Key, T::Value>
where
    R: IntoIterator<Item = T>,
    T: KeyedTraversable,
    T::Key: ArrayKey,
{
    let mut result = Dict::new();
    for source in sources {
        dispatch(&source, "union");
        for (key, value) in source.into_entries() {
            result.insert_if_absent(key, value);
        }
    }
    result
}

/// Collects `(key, value)` pairs into a dictionary; the last value for a
/// key wins.
///
/// # Examples
///
/// ```rust
/// use traverso::combine::from_entries;
///
/// let dict = from_entries([("k", 1), ("j", 2), ("k", 3)]);
/// assert_eq!(dict.get("k"), Some(&3));
/// assert_eq!(dict.first(), Some((&"k", &3)));
/// ```
pub fn from_entries<I, K, V>(entries: I) -> Dict<K, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: ArrayKey,
{
    entries.into_iter().collect()
}

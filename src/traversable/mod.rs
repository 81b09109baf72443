//! Traversable inputs and their classification.
//!
//! Every operation in this crate accepts its input through one of two
//! capability traits:
//!
//! - [`Traversable`]: a source of values that can be walked once, forward.
//! - [`KeyedTraversable`]: a traversable that also yields a unique key per
//!   value.
//!
//! Each implementation declares its [`Shape`]. The shape is the
//! classification the operations dispatch on:
//!
//! | Shape                | Length | Last element        | Examples                          |
//! |----------------------|--------|---------------------|-----------------------------------|
//! | [`Shape::Indexed`]   | O(1)   | O(1)                | `Vec`, slices, arrays, `VecDeque` |
//! | [`Shape::Keyed`]     | O(1)   | O(1) when ordered   | `Dict`, `BTreeMap`, `HashSet`     |
//! | [`Shape::Iterable`]  | unknown | full forward scan  | [`Iterable`], [`Entries`]         |
//!
//! Implementations override [`Traversable::exact_len`] and
//! [`Traversable::last_value`] when their shape grants direct access, so
//! callers get the cheap path without special-casing types themselves.
//!
//! Indexed sequences are keyed by position: their keys are `0..len` as
//! `usize`. Sets are keyed by their own elements.
//!
//! Arbitrary iterators are not traversable by themselves; wrap them with
//! [`iterable`] (values, keyed by position) or [`entries`] (explicit
//! `(key, value)` pairs).
//!
//! # Examples
//!
//! ```rust
//! use traverso::traversable::{classify, entries, iterable, Shape};
//!
//! assert_eq!(classify(&vec![1, 2, 3]), Shape::Indexed);
//! assert_eq!(classify(&std::collections::BTreeMap::<i32, i32>::new()), Shape::Keyed);
//! assert_eq!(classify(&iterable(0..3)), Shape::Iterable);
//! assert_eq!(classify(&entries([("a", 1)])), Shape::Iterable);
//! ```

mod one_pass;
mod std_impls;

pub use one_pass::{Entries, Iterable, entries, iterable};

use std::fmt;

/// The concrete representation of a traversable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Contiguous, integer-indexed sequence with O(1) length and random access.
    Indexed,
    /// Associative container with unique keys and O(1) length.
    Keyed,
    /// One-pass iterable of unknown length without random access.
    Iterable,
}

impl Shape {
    /// Returns `true` if inputs of this shape know their length up front.
    pub const fn has_known_length(self) -> bool {
        matches!(self, Self::Indexed | Self::Keyed)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed => formatter.write_str("indexed"),
            Self::Keyed => formatter.write_str("keyed"),
            Self::Iterable => formatter.write_str("iterable"),
        }
    }
}

/// A source of values that can be traversed once, in a defined order.
///
/// Implemented for owned and borrowed standard collections, for [`Dict`],
/// and for the [`Iterable`]/[`Entries`] wrappers around arbitrary iterators.
/// Borrowed collections yield references, owned collections yield values.
///
/// Traversal never mutates the caller's data: owned inputs are moved in,
/// borrowed inputs are only read (the borrow checker rules out concurrent
/// mutation for the duration of the call).
///
/// [`Dict`]: crate::dict::Dict
///
/// # Examples
///
/// ```rust
/// use traverso::traversable::{Shape, Traversable};
///
/// let numbers = vec![10, 20, 30];
/// assert_eq!((&numbers).shape(), Shape::Indexed);
/// assert_eq!((&numbers).exact_len(), Some(3));
/// assert_eq!((&numbers).last_value(), Some(&30));
///
/// let values: Vec<i32> = numbers.into_values().collect();
/// assert_eq!(values, vec![10, 20, 30]);
/// ```
pub trait Traversable: Sized {
    /// The type of values produced.
    type Value;

    /// Iterator over the values in traversal order.
    type Values: Iterator<Item = Self::Value>;

    /// The representation of this input.
    fn shape(&self) -> Shape;

    /// Consumes the input, returning its values in traversal order.
    fn into_values(self) -> Self::Values;

    /// The number of values, when it is available without traversal.
    #[inline]
    fn exact_len(&self) -> Option<usize> {
        None
    }

    /// The last value in traversal order.
    ///
    /// The default walks the whole input once; shapes with direct access to
    /// their last element override it.
    #[inline]
    fn last_value(self) -> Option<Self::Value> {
        self.into_values().last()
    }
}

/// A [`Traversable`] whose values are each associated with a unique key.
///
/// # Examples
///
/// ```rust
/// use traverso::traversable::KeyedTraversable;
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([("b", 2), ("a", 1)]);
/// assert_eq!((&map).last_entry(), Some((&"b", &2)));
///
/// let letters = vec!['x', 'y'];
/// let pairs: Vec<(usize, char)> = letters.into_entries().collect();
/// assert_eq!(pairs, vec![(0, 'x'), (1, 'y')]);
/// ```
pub trait KeyedTraversable: Traversable {
    /// The type of keys produced.
    type Key;

    /// Iterator over `(key, value)` pairs in traversal order.
    type Entries: Iterator<Item = (Self::Key, Self::Value)>;

    /// Consumes the input, returning its entries in traversal order.
    fn into_entries(self) -> Self::Entries;

    /// The last entry in traversal order.
    ///
    /// The default walks the whole input once; shapes with direct access to
    /// their last entry override it.
    #[inline]
    fn last_entry(self) -> Option<(Self::Key, Self::Value)> {
        self.into_entries().last()
    }
}

/// Returns the shape of `input`.
///
/// This is the single dispatch query operations make per input; it has no
/// side effects and never fails.
#[inline]
pub fn classify<T: Traversable>(input: &T) -> Shape {
    input.shape()
}

/// Classifies `input` and records the decision for `operation`.
#[inline]
pub(crate) fn dispatch<T: Traversable>(input: &T, operation: &'static str) -> Shape {
    let shape = classify(input);
    tracing::trace!(operation, %shape, "dispatch");
    shape
}

//! Wrappers that make arbitrary iterators traversable.

use super::{KeyedTraversable, Shape, Traversable};
use std::iter::{Enumerate, Map};

/// A one-pass iterable of values.
///
/// Created with [`iterable`]. Its length is unknown and it offers no random
/// access, so operations fall back to a single forward scan. Its keys are
/// positions, like those of an indexed sequence.
#[derive(Debug, Clone)]
pub struct Iterable<I> {
    inner: I,
}

/// Wraps any iterable as a one-pass [`Traversable`].
///
/// # Examples
///
/// ```rust
/// use traverso::select::last;
/// use traverso::traversable::iterable;
///
/// let odd_squares = (1..10).filter(|number| number % 2 == 1).map(|number| number * number);
/// assert_eq!(last(iterable(odd_squares)), Some(81));
/// ```
pub fn iterable<I: IntoIterator>(source: I) -> Iterable<I::IntoIter> {
    Iterable {
        inner: source.into_iter(),
    }
}

impl<I: Iterator> Traversable for Iterable<I> {
    type Value = I::Item;
    type Values = I;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.inner
    }
}

impl<I: Iterator> KeyedTraversable for Iterable<I> {
    type Key = usize;
    type Entries = Enumerate<I>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.inner.enumerate()
    }
}

/// A one-pass iterable of `(key, value)` pairs.
///
/// Created with [`entries`]. Keys are taken as given; callers producing
/// duplicate keys get the semantics of the consuming operation (for example
/// last-write-wins in `merge`).
#[derive(Debug, Clone)]
pub struct Entries<I> {
    inner: I,
}

/// Wraps an iterable of `(key, value)` pairs as a one-pass
/// [`KeyedTraversable`].
///
/// # Examples
///
/// ```rust
/// use traverso::select::{first_key, last};
/// use traverso::traversable::entries;
///
/// let scores = [("ann", 3), ("bob", 5)];
/// assert_eq!(first_key(entries(scores)), Some("ann"));
/// assert_eq!(last(entries(scores)), Some(5));
/// ```
pub fn entries<I, K, V>(source: I) -> Entries<I::IntoIter>
where
    I: IntoIterator<Item = (K, V)>,
{
    Entries {
        inner: source.into_iter(),
    }
}

fn value_of<K, V>((_, value): (K, V)) -> V {
    value
}

impl<I, K, V> Traversable for Entries<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Value = V;
    type Values = Map<I, fn((K, V)) -> V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Iterable
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.inner.map(value_of as fn((K, V)) -> V)
    }
}

impl<I, K, V> KeyedTraversable for Entries<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Entries = I;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.inner
    }
}

//! Iterators over a [`Dict`](super::Dict), all in insertion order.

use std::iter::FusedIterator;
use std::{slice, vec};

macro_rules! entry_iterator {
    (
        $(#[$meta:meta])*
        $name:ident<$($lifetime:lifetime,)? $key:ident, $value:ident>,
        $inner:ty,
        $item:ty,
        |$entry:pat_param| $project:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<$($lifetime,)? $key, $value> {
            pub(super) inner: $inner,
        }

        impl<$($lifetime,)? $key, $value> Iterator for $name<$($lifetime,)? $key, $value> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$entry| $project)
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }

            #[inline]
            fn last(self) -> Option<Self::Item> {
                self.inner.last().map(|$entry| $project)
            }
        }

        impl<$($lifetime,)? $key, $value> DoubleEndedIterator for $name<$($lifetime,)? $key, $value> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$entry| $project)
            }
        }

        impl<$($lifetime,)? $key, $value> ExactSizeIterator for $name<$($lifetime,)? $key, $value> {}

        impl<$($lifetime,)? $key, $value> FusedIterator for $name<$($lifetime,)? $key, $value> {}
    };
}

entry_iterator!(
    /// Borrowing iterator over `(key, value)` pairs.
    Iter<'a, K, V>,
    slice::Iter<'a, (K, V)>,
    (&'a K, &'a V),
    |(key, value)| (key, value)
);

entry_iterator!(
    /// Borrowing iterator over keys.
    Keys<'a, K, V>,
    slice::Iter<'a, (K, V)>,
    &'a K,
    |(key, _)| key
);

entry_iterator!(
    /// Borrowing iterator over values.
    Values<'a, K, V>,
    slice::Iter<'a, (K, V)>,
    &'a V,
    |(_, value)| value
);

entry_iterator!(
    /// Owning iterator over `(key, value)` pairs.
    IntoIter<K, V>,
    vec::IntoIter<(K, V)>,
    (K, V),
    |entry| entry
);

entry_iterator!(
    /// Owning iterator over keys.
    IntoKeys<K, V>,
    vec::IntoIter<(K, V)>,
    K,
    |(key, _)| key
);

entry_iterator!(
    /// Owning iterator over values.
    IntoValues<K, V>,
    vec::IntoIter<(K, V)>,
    V,
    |(_, value)| value
);

//! [`Traversable`] implementations for standard collections and [`Dict`].

use super::{KeyedTraversable, Shape, Traversable};
use crate::dict::{self, Dict};
use std::collections::{
    BTreeMap, BTreeSet, HashMap, HashSet, VecDeque, btree_map, btree_set, hash_map, hash_set,
    vec_deque,
};
use std::iter::{Enumerate, Map};
use std::{array, option, slice, vec};

fn duplicate<T: Clone>(element: T) -> (T, T) {
    (element.clone(), element)
}

// =============================================================================
// Vec<T>
// =============================================================================

impl<T> Traversable for Vec<T> {
    type Value = T;
    type Values = vec::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.into_iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    /// O(1): pops the last element.
    #[inline]
    fn last_value(mut self) -> Option<T> {
        self.pop()
    }
}

impl<T> KeyedTraversable for Vec<T> {
    type Key = usize;
    type Entries = Enumerate<vec::IntoIter<T>>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter().enumerate()
    }

    #[inline]
    fn last_entry(mut self) -> Option<(usize, T)> {
        let index = self.len().checked_sub(1)?;
        self.pop().map(|value| (index, value))
    }
}

impl<'a, T> Traversable for &'a Vec<T> {
    type Value = &'a T;
    type Values = slice::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(self) -> Option<&'a T> {
        self.as_slice().last()
    }
}

impl<'a, T> KeyedTraversable for &'a Vec<T> {
    type Key = usize;
    type Entries = Enumerate<slice::Iter<'a, T>>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter().enumerate()
    }

    #[inline]
    fn last_entry(self) -> Option<(usize, &'a T)> {
        self.as_slice().last_entry()
    }
}

// =============================================================================
// Slices and arrays
// =============================================================================

impl<'a, T> Traversable for &'a [T] {
    type Value = &'a T;
    type Values = slice::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(self) -> Option<&'a T> {
        self.last()
    }
}

impl<'a, T> KeyedTraversable for &'a [T] {
    type Key = usize;
    type Entries = Enumerate<slice::Iter<'a, T>>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter().enumerate()
    }

    #[inline]
    fn last_entry(self) -> Option<(usize, &'a T)> {
        let index = self.len().checked_sub(1)?;
        self.last().map(|value| (index, value))
    }
}

impl<T, const N: usize> Traversable for [T; N] {
    type Value = T;
    type Values = array::IntoIter<T, N>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.into_iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(N)
    }

    #[inline]
    fn last_value(self) -> Option<T> {
        self.into_iter().next_back()
    }
}

impl<T, const N: usize> KeyedTraversable for [T; N] {
    type Key = usize;
    type Entries = Enumerate<array::IntoIter<T, N>>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter().enumerate()
    }

    #[inline]
    fn last_entry(self) -> Option<(usize, T)> {
        let index = N.checked_sub(1)?;
        self.into_iter().next_back().map(|value| (index, value))
    }
}

impl<'a, T, const N: usize> Traversable for &'a [T; N] {
    type Value = &'a T;
    type Values = slice::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(N)
    }

    #[inline]
    fn last_value(self) -> Option<&'a T> {
        self.last()
    }
}

impl<'a, T, const N: usize> KeyedTraversable for &'a [T; N] {
    type Key = usize;
    type Entries = Enumerate<slice::Iter<'a, T>>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter().enumerate()
    }

    #[inline]
    fn last_entry(self) -> Option<(usize, &'a T)> {
        self.as_slice().last_entry()
    }
}

// =============================================================================
// VecDeque<T>
// =============================================================================

impl<T> Traversable for VecDeque<T> {
    type Value = T;
    type Values = vec_deque::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.into_iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(mut self) -> Option<T> {
        self.pop_back()
    }
}

impl<T> KeyedTraversable for VecDeque<T> {
    type Key = usize;
    type Entries = Enumerate<vec_deque::IntoIter<T>>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter().enumerate()
    }

    #[inline]
    fn last_entry(mut self) -> Option<(usize, T)> {
        let index = self.len().checked_sub(1)?;
        self.pop_back().map(|value| (index, value))
    }
}

impl<'a, T> Traversable for &'a VecDeque<T> {
    type Value = &'a T;
    type Values = vec_deque::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(self) -> Option<&'a T> {
        self.back()
    }
}

impl<'a, T> KeyedTraversable for &'a VecDeque<T> {
    type Key = usize;
    type Entries = Enumerate<vec_deque::Iter<'a, T>>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter().enumerate()
    }

    #[inline]
    fn last_entry(self) -> Option<(usize, &'a T)> {
        let index = self.len().checked_sub(1)?;
        self.back().map(|value| (index, value))
    }
}

// =============================================================================
// Dict<K, V>
// =============================================================================

impl<K: dict::ArrayKey, V> Traversable for Dict<K, V> {
    type Value = V;
    type Values = dict::IntoValues<K, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        Dict::into_values(self)
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(mut self) -> Option<V> {
        self.pop().map(|(_, value)| value)
    }
}

impl<K: dict::ArrayKey, V> KeyedTraversable for Dict<K, V> {
    type Key = K;
    type Entries = dict::IntoIter<K, V>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter()
    }

    #[inline]
    fn last_entry(mut self) -> Option<(K, V)> {
        self.pop()
    }
}

impl<'a, K, V> Traversable for &'a Dict<K, V> {
    type Value = &'a V;
    type Values = dict::Values<'a, K, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.values()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(self) -> Option<&'a V> {
        self.last().map(|(_, value)| value)
    }
}

impl<'a, K, V> KeyedTraversable for &'a Dict<K, V> {
    type Key = &'a K;
    type Entries = dict::Iter<'a, K, V>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter()
    }

    #[inline]
    fn last_entry(self) -> Option<(&'a K, &'a V)> {
        self.last()
    }
}

// =============================================================================
// BTreeMap<K, V>
// =============================================================================

impl<K: Ord, V> Traversable for BTreeMap<K, V> {
    type Value = V;
    type Values = btree_map::IntoValues<K, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        BTreeMap::into_values(self)
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    /// O(log n): takes the greatest entry.
    #[inline]
    fn last_value(mut self) -> Option<V> {
        self.pop_last().map(|(_, value)| value)
    }
}

impl<K: Ord, V> KeyedTraversable for BTreeMap<K, V> {
    type Key = K;
    type Entries = btree_map::IntoIter<K, V>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter()
    }

    #[inline]
    fn last_entry(mut self) -> Option<(K, V)> {
        self.pop_last()
    }
}

impl<'a, K: Ord, V> Traversable for &'a BTreeMap<K, V> {
    type Value = &'a V;
    type Values = btree_map::Values<'a, K, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.values()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(self) -> Option<&'a V> {
        self.last_key_value().map(|(_, value)| value)
    }
}

impl<'a, K: Ord, V> KeyedTraversable for &'a BTreeMap<K, V> {
    type Key = &'a K;
    type Entries = btree_map::Iter<'a, K, V>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter()
    }

    #[inline]
    fn last_entry(self) -> Option<(&'a K, &'a V)> {
        self.last_key_value()
    }
}

// =============================================================================
// HashMap<K, V, S>
// =============================================================================

impl<K, V, S> Traversable for HashMap<K, V, S> {
    type Value = V;
    type Values = hash_map::IntoValues<K, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        HashMap::into_values(self)
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<K, V, S> KeyedTraversable for HashMap<K, V, S> {
    type Key = K;
    type Entries = hash_map::IntoIter<K, V>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter()
    }
}

impl<'a, K, V, S> Traversable for &'a HashMap<K, V, S> {
    type Value = &'a V;
    type Values = hash_map::Values<'a, K, V>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.values()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<'a, K, V, S> KeyedTraversable for &'a HashMap<K, V, S> {
    type Key = &'a K;
    type Entries = hash_map::Iter<'a, K, V>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter()
    }
}

// =============================================================================
// Sets (keyed by their own elements)
// =============================================================================

impl<T: Ord> Traversable for BTreeSet<T> {
    type Value = T;
    type Values = btree_set::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.into_iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(mut self) -> Option<T> {
        self.pop_last()
    }
}

impl<T: Ord + Clone> KeyedTraversable for BTreeSet<T> {
    type Key = T;
    type Entries = Map<btree_set::IntoIter<T>, fn(T) -> (T, T)>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter().map(duplicate as fn(T) -> (T, T))
    }

    #[inline]
    fn last_entry(mut self) -> Option<(T, T)> {
        self.pop_last().map(duplicate)
    }
}

impl<'a, T: Ord> Traversable for &'a BTreeSet<T> {
    type Value = &'a T;
    type Values = btree_set::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }

    #[inline]
    fn last_value(self) -> Option<&'a T> {
        self.last()
    }
}

impl<'a, T: Ord> KeyedTraversable for &'a BTreeSet<T> {
    type Key = &'a T;
    type Entries = Map<btree_set::Iter<'a, T>, fn(&'a T) -> (&'a T, &'a T)>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter().map(duplicate as fn(&'a T) -> (&'a T, &'a T))
    }

    #[inline]
    fn last_entry(self) -> Option<(&'a T, &'a T)> {
        self.last().map(duplicate)
    }
}

impl<T, S> Traversable for HashSet<T, S> {
    type Value = T;
    type Values = hash_set::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.into_iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Clone, S> KeyedTraversable for HashSet<T, S> {
    type Key = T;
    type Entries = Map<hash_set::IntoIter<T>, fn(T) -> (T, T)>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter().map(duplicate as fn(T) -> (T, T))
    }
}

impl<'a, T, S> Traversable for &'a HashSet<T, S> {
    type Value = &'a T;
    type Values = hash_set::Iter<'a, T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Keyed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<'a, T, S> KeyedTraversable for &'a HashSet<T, S> {
    type Key = &'a T;
    type Entries = Map<hash_set::Iter<'a, T>, fn(&'a T) -> (&'a T, &'a T)>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.iter().map(duplicate as fn(&'a T) -> (&'a T, &'a T))
    }
}

// =============================================================================
// Option<T>
// =============================================================================

impl<T> Traversable for Option<T> {
    type Value = T;
    type Values = option::IntoIter<T>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Indexed
    }

    #[inline]
    fn into_values(self) -> Self::Values {
        self.into_iter()
    }

    #[inline]
    fn exact_len(&self) -> Option<usize> {
        Some(usize::from(self.is_some()))
    }

    #[inline]
    fn last_value(self) -> Option<T> {
        self
    }
}

impl<T> KeyedTraversable for Option<T> {
    type Key = usize;
    type Entries = Enumerate<option::IntoIter<T>>;

    #[inline]
    fn into_entries(self) -> Self::Entries {
        self.into_iter().enumerate()
    }

    #[inline]
    fn last_entry(self) -> Option<(usize, T)> {
        self.map(|value| (0, value))
    }
}

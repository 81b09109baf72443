//! Reversing and shuffling.

use crate::traversable::{Traversable, dispatch};
use rand::Rng;
use rand::seq::SliceRandom;

/// Returns the values in reverse order.
///
/// # Examples
///
/// ```rust
/// use traverso::order::reverse;
/// use traverso::traversable::iterable;
///
/// assert_eq!(reverse(vec![1, 2, 3, 4, 5]), vec![5, 4, 3, 2, 1]);
/// assert_eq!(reverse(iterable(1..=3)), vec![3, 2, 1]);
/// ```
pub fn reverse<T: Traversable>(input: T) -> Vec<T::Value> {
    dispatch(&input, "reverse");
    let mut values: Vec<T::Value> = input.into_values().collect();
    values.reverse();
    values
}

/// Returns the values in a uniformly random order, drawn from the
/// thread-local generator.
///
/// Use [`shuffle_with`] to supply the generator, e.g. a seeded one in tests.
///
/// # Examples
///
/// ```rust
/// use traverso::order::shuffle;
///
/// let mut shuffled = shuffle(vec![8, 6, 7, 5, 3, 0, 9]);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![0, 3, 5, 6, 7, 8, 9]);
/// ```
pub fn shuffle<T: Traversable>(input: T) -> Vec<T::Value> {
    shuffle_with(input, &mut rand::rng())
}

/// Returns the values in a uniformly random order drawn from `rng`.
///
/// The permutation is a Fisher-Yates shuffle, so the same generator state
/// always produces the same order.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use traverso::order::shuffle_with;
///
/// let left = shuffle_with(vec!['a', 'b', 'c', 'd'], &mut StdRng::seed_from_u64(7));
/// let right = shuffle_with(vec!['a', 'b', 'c', 'd'], &mut StdRng::seed_from_u64(7));
/// assert_eq!(left, right);
/// ```
pub fn shuffle_with<T, R>(input: T, rng: &mut R) -> Vec<T::Value>
where
    T: Traversable,
    R: Rng + ?Sized,
{
    dispatch(&input, "shuffle");
    let mut values: Vec<T::Value> = input.into_values().collect();
    values.shuffle(rng);
    values
}

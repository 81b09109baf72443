//! Arithmetic sequences built by repeated accumulation.

use crate::invariant::{Direction, Result, Violation, fail};
use num_traits::{One, Zero};

/// A numeric type that [`range`] can step through.
///
/// Implemented for every primitive integer and for `f32`/`f64`.
pub trait RangeBound: Copy + PartialOrd + Zero + One {
    /// Moves `self` by `increment` in `direction`.
    ///
    /// A negative increment is added as is; a positive one is added when
    /// ascending and subtracted when descending. Returns `None` when the
    /// step overflows or fails to change the value.
    fn advance(self, increment: Self, direction: Direction) -> Option<Self>;
}

macro_rules! impl_range_bound_for_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl RangeBound for $int {
                #[inline]
                fn advance(self, increment: Self, direction: Direction) -> Option<Self> {
                    match direction {
                        Direction::Descending if increment > 0 => self.checked_sub(increment),
                        Direction::Stationary => None,
                        _ => self.checked_add(increment),
                    }
                }
            }
        )*
    };
}

impl_range_bound_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_range_bound_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl RangeBound for $float {
                #[inline]
                fn advance(self, increment: Self, direction: Direction) -> Option<Self> {
                    let next = match direction {
                        Direction::Descending if increment > 0.0 => self - increment,
                        Direction::Stationary => return None,
                        _ => self + increment,
                    };
                    #[allow(clippy::float_cmp)]
                    let stalled = next == self;
                    (!stalled).then_some(next)
                }
            }
        )*
    };
}

impl_range_bound_for_float!(f32, f64);

/// Generates the sequence `start, start + increment, ...` up to `end`.
///
/// The direction comes from comparing `start` with `end`. Without an
/// increment the sequence steps by one. Each value is obtained by adding
/// the increment to the previous one, and it is kept only while it has not
/// passed `end`, so `end` is included only when the accumulation lands on it
/// exactly. Floating-point drift is not corrected.
///
/// Increment rules:
///
/// - ascending (`start < end`): the increment must be positive;
/// - descending (`start > end`): the increment may have either sign, and
///   its magnitude is stepped towards `end`;
/// - `start == end`: any non-zero increment yields `[start]`.
///
/// Comparisons involving NaN count as `start == end`. Generation also stops
/// when a step would overflow or no longer changes the value.
///
/// # Errors
///
/// Returns [`PreconditionFailed`](crate::invariant::PreconditionFailed)
/// with [`Violation::InvalidIncrement`] when the increment is zero, NaN, or
/// not positive for an ascending range.
///
/// # Examples
///
/// ```rust
/// use traverso::order::range;
///
/// assert_eq!(range(1, 10, Some(3)), Ok(vec![1, 4, 7, 10]));
/// assert_eq!(range(5, 1, None), Ok(vec![5, 4, 3, 2, 1]));
/// assert_eq!(range(4, -4, Some(3)), Ok(vec![4, 1, -2]));
/// assert_eq!(range(1, 1, Some(2)), Ok(vec![1]));
///
/// assert!(range(0, 1, Some(0)).is_err());
/// assert!(range(-10, 10, Some(-30)).is_err());
/// ```
pub fn range<N: RangeBound>(start: N, end: N, increment: Option<N>) -> Result<Vec<N>> {
    const OPERATION: &str = "range";

    let direction = if start < end {
        Direction::Ascending
    } else if start > end {
        Direction::Descending
    } else {
        Direction::Stationary
    };
    let increment = increment.unwrap_or_else(N::one);

    let zero = N::zero();
    let valid = match direction {
        Direction::Ascending => increment > zero,
        Direction::Descending | Direction::Stationary => increment > zero || increment < zero,
    };
    if !valid {
        return Err(fail(OPERATION, Violation::InvalidIncrement { direction }));
    }

    let mut values = vec![start];
    let mut current = start;
    while let Some(next) = current.advance(increment, direction) {
        let within = match direction {
            Direction::Ascending => next <= end,
            Direction::Descending => next >= end,
            Direction::Stationary => false,
        };
        if !within {
            break;
        }
        values.push(next);
        current = next;
    }

    tracing::trace!(operation = OPERATION, %direction, len = values.len(), "generated");
    Ok(values)
}

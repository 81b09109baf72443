//! Producing ordered sequences.
//!
//! Every operation here materializes its input into a fresh `Vec` and never
//! touches the input itself:
//!
//! - [`range`]: arithmetic sequences over any [`RangeBound`] number.
//! - [`reverse`]: the values in reverse order.
//! - [`shuffle`] / [`shuffle_with`]: a uniformly random permutation, from
//!   the thread-local generator or a caller-supplied one.
//! - [`sort`] / [`sort_with`]: stable sort by natural order or comparator.
//! - [`sort_by`] / [`sort_by_with`]: stable sort by a derived key that is
//!   computed once per value.
//!
//! # Examples
//!
//! ```rust
//! use traverso::order::{range, reverse, sort_by};
//!
//! let countdown = reverse(range(1, 5, None).unwrap());
//! assert_eq!(countdown, vec![5, 4, 3, 2, 1]);
//!
//! let by_length = sort_by(["pear", "fig", "banana"], |fruit| fruit.len());
//! assert_eq!(by_length, vec!["fig", "pear", "banana"]);
//! ```

mod permute;
mod range;
mod sorting;

pub use permute::{reverse, shuffle, shuffle_with};
pub use range::{RangeBound, range};
pub use sorting::{sort, sort_by, sort_by_with, sort_with};

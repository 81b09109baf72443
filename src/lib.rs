//! # traverso
//!
//! Collection algorithms over any traversable input: selecting single
//! elements, combining keyed containers, and producing ordered sequences.
//!
//! ## Overview
//!
//! Operations accept vectors, slices, arrays, deques, maps, sets, options
//! and arbitrary iterators through the [`Traversable`] capability traits.
//! Each input reports its [`Shape`], which lets operations such as
//! [`select::last`] take the constant-time path whenever the input allows
//! it.
//!
//! - **Selection**: `find`, `first`, `last`, `exactly_one_or_fail` and their
//!   key-returning siblings
//! - **Combination**: `associate`, `merge`, `union`
//! - **Ordering**: `range`, `reverse`, `shuffle`, `sort`, `sort_by`
//!
//! Keyed results are insertion-ordered [`Dict`]s.
//!
//! Every operation that can fail has an `Option`-returning sibling; the
//! `_or_fail` variant turns the absent case into a [`PreconditionFailed`].
//!
//! ## Feature Flags
//!
//! - `select`: Selection operations
//! - `combine`: Combination operations
//! - `order`: Ordering operations (pulls in `rand` and `num-traits`)
//! - `serde`: `Serialize`/`Deserialize` for [`Dict`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use traverso::prelude::*;
//!
//! let scores = dict! { "ada" => 3, "grace" => 5 };
//! let bonus = dict! { "grace" => 6, "alan" => 1 };
//!
//! let merged = merge(scores, [bonus]);
//! assert_eq!(last_key(&merged), Some(&"alan"));
//!
//! let ranking = sort_by(iterable(merged.values()), |score| std::cmp::Reverse(**score));
//! assert_eq!(ranking, vec![&6, &3, &1]);
//! ```
//!
//! [`Traversable`]: traversable::Traversable
//! [`Shape`]: traversable::Shape
//! [`Dict`]: dict::Dict

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, [`Dict`](crate::dict::Dict) with its
/// literal macro, the error type, and every enabled operation.
///
/// # Usage
///
/// ```rust
/// use traverso::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dict;
    pub use crate::dict::{ArrayKey, Dict};
    pub use crate::invariant::{PreconditionFailed, Violation};
    pub use crate::traversable::{
        KeyedTraversable, Shape, Traversable, classify, entries, iterable,
    };

    #[cfg(feature = "select")]
    pub use crate::select::*;

    #[cfg(feature = "combine")]
    pub use crate::combine::*;

    #[cfg(feature = "order")]
    pub use crate::order::*;
}

pub mod dict;
pub mod invariant;
pub mod traversable;

#[cfg(feature = "select")]
pub mod select;

#[cfg(feature = "combine")]
pub mod combine;

#[cfg(feature = "order")]
pub mod order;

pub use invariant::{PreconditionFailed, Result};

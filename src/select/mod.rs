//! Selecting elements from traversable inputs.
//!
//! Most operations come in pairs that share one implementation:
//!
//! | Returns `Option`  | Returns `Result`      |
//! |-------------------|-----------------------|
//! | [`first`]         | [`first_or_fail`]     |
//! | [`first_key`]     | [`first_key_or_fail`] |
//! | [`last`]          | [`last_or_fail`]      |
//! | [`last_key`]      | [`last_key_or_fail`]  |
//!
//! The failing variant calls the optional one and turns `None` into a
//! [`PreconditionFailed`](crate::invariant::PreconditionFailed), so both
//! agree on every non-empty input. [`find`], [`find_key`] and
//! [`first_from_nullable`] only have the optional form;
//! [`exactly_one_or_fail`] only has the failing form.
//!
//! The module also provides the size and membership queries [`count`],
//! [`is_empty`], [`contains`] and [`contains_key`].
//!
//! # Examples
//!
//! ```rust
//! use traverso::select::{exactly_one_or_fail, first, last_or_fail};
//!
//! let readings = vec![3.5, 4.0, 4.25];
//! assert_eq!(first(&readings), Some(&3.5));
//! assert_eq!(last_or_fail(&readings), Ok(&4.25));
//!
//! let empty: Vec<f64> = Vec::new();
//! assert!(last_or_fail(&empty).is_err());
//! assert!(exactly_one_or_fail(&readings, None).is_err());
//! ```

mod element;
mod introspect;

pub use element::{
    exactly_one_or_fail, find, find_key, first, first_from_nullable, first_key, first_key_or_fail,
    first_or_fail, last, last_key, last_key_or_fail, last_or_fail,
};
pub use introspect::{contains, contains_key, count, is_empty};

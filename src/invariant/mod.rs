//! Precondition failures and the helpers that report them.
//!
//! Every operation in this crate that can refuse its input reports the
//! refusal through this module. There is exactly one error type,
//! [`PreconditionFailed`], which records the operation that refused, the
//! [`Violation`] that caused it, and an optional caller-supplied message.
//!
//! The helpers [`fail`], [`ensure`] and [`require`] are what the operations
//! use internally. [`require`] is the bridge between the nullable and the
//! failing variant of an operation: the failing variant computes the
//! nullable result and hands it to `require`, so both variants agree on
//! every successful input.
//!
//! # Examples
//!
//! ```rust
//! use traverso::invariant::{PreconditionFailed, Violation, require};
//!
//! let present = require(Some(3), "first_or_fail");
//! assert_eq!(present, Ok(3));
//!
//! let missing: Result<i32, PreconditionFailed> = require(None, "first_or_fail");
//! let error = missing.unwrap_err();
//! assert_eq!(error.violation(), &Violation::EmptyInput);
//! assert_eq!(error.to_string(), "first_or_fail: expected non-empty input");
//! ```

use std::fmt;

/// A specialized `Result` for operations that enforce preconditions.
pub type Result<T> = std::result::Result<T, PreconditionFailed>;

/// Direction of a numeric range, as derived from its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `start < end`.
    Ascending,
    /// `start > end`.
    Descending,
    /// `start == end` (or the bounds are unordered).
    Stationary,
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => formatter.write_str("ascending"),
            Self::Descending => formatter.write_str("descending"),
            Self::Stationary => formatter.write_str("single-element"),
        }
    }
}

/// The precondition that an input violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The input was empty but at least one element was required.
    #[error("expected non-empty input")]
    EmptyInput,

    /// A second element was produced where exactly one was required.
    ///
    /// `count` carries the total number of elements when the input knew its
    /// length up front.
    #[error("expected exactly one element{}", render_count(.count))]
    MoreThanOne {
        /// Total element count, if it was cheaply available.
        count: Option<usize>,
    },

    /// Keys and values passed to `associate` had different lengths.
    #[error("expected length of keys and values to be the same (got {keys} keys and {values} values)")]
    LengthMismatch {
        /// Number of keys.
        keys: usize,
        /// Number of values.
        values: usize,
    },

    /// A range increment was zero or pointed away from the range's end.
    #[error("invalid increment for {direction} range")]
    InvalidIncrement {
        /// Direction implied by the range bounds.
        direction: Direction,
    },
}

fn render_count(count: &Option<usize>) -> String {
    count.map_or_else(String::new, |count| format!(" but got {count}"))
}

/// Raised when a documented precondition of an operation is violated.
///
/// The error always names the operation that refused its input. When the
/// caller supplied a custom message it replaces the default rendering.
///
/// # Examples
///
/// ```rust
/// use traverso::invariant::{PreconditionFailed, Violation};
///
/// let error = PreconditionFailed::new("exactly_one_or_fail", Violation::MoreThanOne { count: Some(2) });
/// assert_eq!(
///     error.to_string(),
///     "exactly_one_or_fail: expected exactly one element but got 2"
/// );
///
/// let custom = error.with_message("only one admin may exist");
/// assert_eq!(custom.to_string(), "only one admin may exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionFailed {
    operation: &'static str,
    violation: Violation,
    message: Option<String>,
}

impl PreconditionFailed {
    /// Creates a failure for `operation` with the default message.
    pub const fn new(operation: &'static str, violation: Violation) -> Self {
        Self {
            operation,
            violation,
            message: None,
        }
    }

    /// Replaces the default message with `message`.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The name of the operation that refused its input.
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// The violated precondition.
    pub const fn violation(&self) -> &Violation {
        &self.violation
    }

    /// The caller-supplied message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for PreconditionFailed {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => formatter.write_str(message),
            None => write!(formatter, "{}: {}", self.operation, self.violation),
        }
    }
}

impl std::error::Error for PreconditionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.violation)
    }
}

/// Builds a [`PreconditionFailed`] and records it in the log.
pub fn fail(operation: &'static str, violation: Violation) -> PreconditionFailed {
    tracing::debug!(operation, %violation, "precondition failed");
    PreconditionFailed::new(operation, violation)
}

/// Returns `Ok(())` when `condition` holds, otherwise the reported failure.
///
/// The violation is built lazily so that counting work is only done on the
/// failure path.
///
/// # Errors
///
/// Returns [`PreconditionFailed`] carrying the violation when `condition`
/// is false.
pub fn ensure<F>(condition: bool, operation: &'static str, violation: F) -> Result<()>
where
    F: FnOnce() -> Violation,
{
    if condition {
        Ok(())
    } else {
        Err(fail(operation, violation()))
    }
}

/// Turns the result of a nullable operation into the result of its failing
/// twin: `Some` passes through, `None` becomes [`Violation::EmptyInput`].
///
/// # Errors
///
/// Returns [`PreconditionFailed`] with [`Violation::EmptyInput`] when
/// `value` is `None`.
pub fn require<T>(value: Option<T>, operation: &'static str) -> Result<T> {
    value.ok_or_else(|| fail(operation, Violation::EmptyInput))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    #[case(Violation::EmptyInput, "expected non-empty input")]
    #[case(Violation::MoreThanOne { count: None }, "expected exactly one element")]
    #[case(Violation::MoreThanOne { count: Some(4) }, "expected exactly one element but got 4")]
    #[case(
        Violation::LengthMismatch { keys: 1, values: 2 },
        "expected length of keys and values to be the same (got 1 keys and 2 values)"
    )]
    #[case(
        Violation::InvalidIncrement { direction: Direction::Ascending },
        "invalid increment for ascending range"
    )]
    #[case(
        Violation::InvalidIncrement { direction: Direction::Stationary },
        "invalid increment for single-element range"
    )]
    fn test_violation_display(#[case] violation: Violation, #[case] expected: &str) {
        assert_eq!(violation.to_string(), expected);
    }

    #[rstest]
    fn test_precondition_failed_display_prefixes_operation() {
        let error = PreconditionFailed::new("last_or_fail", Violation::EmptyInput);
        assert_eq!(error.to_string(), "last_or_fail: expected non-empty input");
    }

    #[rstest]
    fn test_custom_message_replaces_default() {
        let error = PreconditionFailed::new("exactly_one_or_fail", Violation::EmptyInput)
            .with_message("no user with id 7");
        assert_eq!(error.to_string(), "no user with id 7");
        assert_eq!(error.message(), Some("no user with id 7"));
        assert_eq!(error.violation(), &Violation::EmptyInput);
    }

    #[rstest]
    fn test_source_is_violation() {
        let error = PreconditionFailed::new("range", Violation::InvalidIncrement {
            direction: Direction::Descending,
        });
        let source = error.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("invalid increment for descending range"));
    }

    #[rstest]
    fn test_ensure_passes_and_fails() {
        assert_eq!(ensure(true, "associate", || unreachable!()), Ok(()));

        let error = ensure(false, "associate", || Violation::LengthMismatch {
            keys: 3,
            values: 1,
        })
        .unwrap_err();
        assert_eq!(error.operation(), "associate");
        assert_eq!(
            error.violation(),
            &Violation::LengthMismatch { keys: 3, values: 1 }
        );
    }

    #[rstest]
    #[case(Some(10), Ok(10))]
    #[case(None, Err(PreconditionFailed::new("first_or_fail", Violation::EmptyInput)))]
    fn test_require(#[case] value: Option<i32>, #[case] expected: Result<i32>) {
        assert_eq!(require(value, "first_or_fail"), expected);
    }

    #[rstest]
    fn test_error_is_send_sync_static() {
        fn assert_bounds<E: Error + Send + Sync + 'static>() {}
        assert_bounds::<PreconditionFailed>();
    }
}

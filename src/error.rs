//! Error types for set operations.
//!
//! Only one operation can fail: reducing an empty set without an initial
//! value. Everything else either succeeds or reports absence through
//! `Option`.

use thiserror::Error;

/// Returned when a fold has no element to seed its accumulator with.
///
/// # Examples
///
/// ```rust
/// use enhanced_set::EmptyAccumulatorError;
///
/// let error = EmptyAccumulatorError { operation: "reduce" };
/// assert_eq!(
///     error.to_string(),
///     "reduce: an initial value is required when using an empty set"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation}: an initial value is required when using an empty set")]
pub struct EmptyAccumulatorError {
    /// The name of the operation that was rejected.
    pub operation: &'static str,
}

/// Errors produced by [`EnhancedSet`](crate::EnhancedSet) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SetError {
    /// A reduction over an empty set was attempted without an initial value.
    #[error(transparent)]
    EmptyAccumulator(#[from] EmptyAccumulatorError),
}

impl SetError {
    /// Returns `true` when the error reports a violated precondition of the
    /// called operation rather than a failure during its execution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::{EmptyAccumulatorError, SetError};
    ///
    /// let error = SetError::from(EmptyAccumulatorError { operation: "reduce" });
    /// assert!(error.is_precondition_violation());
    /// ```
    #[must_use]
    pub const fn is_precondition_violation(&self) -> bool {
        match self {
            Self::EmptyAccumulator(_) => true,
        }
    }
}

/// A `Result` alias defaulting to [`SetError`].
pub type Result<T, E = SetError> = std::result::Result<T, E>;

//! Error types for the calendar and quota engine.
//!
//! Every fallible operation in the workspace reports a single
//! `thiserror`-derived enum.  Errors only arise while validating input at the
//! boundary (parsing codes, dates and years, building settings); the
//! computations themselves are total over their typed inputs.
//!
//! The [`ensure!`](crate::ensure) macro is the shorthand for precondition
//! checks.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The code does not name one of the 16 federal states.
    #[error("invalid jurisdiction: {0:?}")]
    InvalidJurisdiction(String),

    /// The year is not a number or lies outside the supported range.
    #[error("invalid year: {0:?} (supported range is 2000..=2100)")]
    InvalidYear(String),

    /// The code is not one of the known absence types.
    #[error("invalid absence type: {0:?}")]
    InvalidAbsenceType(String),

    /// Date construction or parsing failed.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` early if `$cond` is false.
///
/// # Example
/// ```
/// use up_core::{ensure, errors::Error};
/// fn non_negative(days: f64) -> up_core::errors::Result<f64> {
///     ensure!(days >= 0.0, "allowance must not be negative, got {days}");
///     Ok(days)
/// }
/// assert!(non_negative(30.0).is_ok());
/// assert_eq!(
///     non_negative(-1.0),
///     Err(Error::Precondition("allowance must not be negative, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

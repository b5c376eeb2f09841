//! Error types for the plazos workspace.
//!
//! The calendar engine distinguishes exactly two failure classes: a caller
//! handed us something outside the defined domain (an impossible date, a
//! negative business-day offset), or the override store could not serve a
//! lookup.  "Date is not a business day" is never an error; it is a normal
//! return value.

use thiserror::Error;

/// The error type used throughout the plazos workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument outside the defined domain: a structurally invalid date
    /// (e.g. February 30), a date outside the supported range, or a negative
    /// business-day offset.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The override store failed to answer a lookup.
    ///
    /// This must propagate to the caller: a deadline computed while silently
    /// assuming "no override exists" could be legally wrong.
    #[error("override store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Shorthand `Result` type used throughout the plazos workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use plazo_core::ensure;
/// fn non_negative(n: i32) -> plazo_core::Result<i32> {
///     ensure!(n >= 0, "offset must be non-negative, got {n}");
///     Ok(n)
/// }
/// assert!(non_negative(3).is_ok());
/// assert!(non_negative(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

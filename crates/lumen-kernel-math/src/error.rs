//! Error types for kernel arithmetic.

use thiserror::Error;

/// Domain errors raised by vector, point, and normal arithmetic.
///
/// Every variant is a caller error. The checked operations return them; the
/// operator forms panic with the same message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A value was divided by a zero scalar.
    #[error("division by zero scalar")]
    DivisionByZero,

    /// A zero-length vector or normal was normalized.
    #[error("cannot normalize a zero-magnitude value")]
    ZeroMagnitude,

    /// A value with an infinite or NaN component was normalized.
    #[error("cannot normalize a non-finite value")]
    NonFinite,

    /// Integer arithmetic left the range of the component type.
    #[error("integer overflow")]
    Overflow,
}

/// Result type for fallible kernel arithmetic.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Divisor guard shared by every float division in the kernel.
#[inline]
pub(crate) fn check_divisor(s: f64) -> Result<f64> {
    if s == 0.0 {
        Err(GeometryError::DivisionByZero)
    } else {
        Ok(s)
    }
}

/// Unwraps a checked result, panicking with the error's message.
#[inline]
#[track_caller]
pub(crate) fn expect_ok<T>(r: Result<T>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

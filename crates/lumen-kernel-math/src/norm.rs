//! Normalization that holds across the full range of `f64`.
//!
//! Components are first divided by the largest absolute component, so the
//! sum of squares lies in `[1, n]` and cannot overflow or underflow.

use crate::error::{GeometryError, Result};

/// Unit direction of `c`.
///
/// Fails with `ZeroMagnitude` for the zero vector and `NonFinite` when any
/// component is infinite or NaN.
pub(crate) fn unit<const N: usize>(c: [f64; N]) -> Result<[f64; N]> {
    if c.iter().any(|v| !v.is_finite()) {
        return Err(GeometryError::NonFinite);
    }
    let scale = c.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if scale == 0.0 {
        return Err(GeometryError::ZeroMagnitude);
    }
    let scaled = c.map(|v| v / scale);
    let len = scaled.iter().map(|v| v * v).sum::<f64>().sqrt();
    Ok(scaled.map(|v| v / len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_extreme_scales() {
        let big = unit([1e300, 1e300, 0.0]).unwrap();
        assert_relative_eq!(big[0], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(big[1], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_eq!(unit([1e-200, 0.0, 0.0]), Ok([1.0, 0.0, 0.0]));
        assert_eq!(unit([f64::MAX, 0.0]), Ok([1.0, 0.0]));
        assert_eq!(unit([0.0, 5e-324]), Ok([0.0, 1.0]));
    }

    #[test]
    fn test_unit_rejects_zero_and_non_finite() {
        assert_eq!(unit([0.0, -0.0, 0.0]), Err(GeometryError::ZeroMagnitude));
        assert_eq!(unit([f64::INFINITY, 0.0, 0.0]), Err(GeometryError::NonFinite));
        assert_eq!(unit([f64::NAN, 1.0]), Err(GeometryError::NonFinite));
    }
}

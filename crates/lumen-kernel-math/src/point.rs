//! Affine positions in 2D and 3D.
//!
//! The difference of two points is a vector, and a point offset by a vector is
//! a point. Adding two points has no meaning and is not implemented; scaling
//! by a scalar is kept for interpolation weights.

use std::ops::{Add, Div, Index, Mul, Sub};

use crate::error::{check_divisor, expect_ok, Result};
use crate::vector::{Vector2, Vector3};

// =============================================================================
// Point2
// =============================================================================

/// A position in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2 {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Divide the coordinates by `s`, failing when `s` is zero.
    pub fn checked_div(self, s: f64) -> Result<Self> {
        let s = check_divisor(s)?;
        Ok(Point2::new(self.x / s, self.y / s))
    }

    /// Linear interpolation, `self * (1 - t) + other * t`.
    ///
    /// Not clamped: `t` outside `[0, 1]` extrapolates along the line.
    pub fn lerp(&self, other: Point2, t: f64) -> Point2 {
        Point2::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
        )
    }

    /// Distance to `other`.
    pub fn distance(&self, other: Point2) -> f64 {
        (*self - other).mag()
    }

    /// Squared distance to `other`.
    pub fn distance_squared(&self, other: Point2) -> f64 {
        (*self - other).mag_squared()
    }
}

impl Sub for Point2 {
    type Output = Vector2;
    fn sub(self, rhs: Point2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2> for Point2 {
    type Output = Point2;
    fn add(self, v: Vector2) -> Point2 {
        Point2::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub<Vector2> for Point2 {
    type Output = Point2;
    fn sub(self, v: Vector2) -> Point2 {
        Point2::new(self.x - v.x, self.y - v.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;
    fn mul(self, s: f64) -> Point2 {
        Point2::new(self.x * s, self.y * s)
    }
}

/// # Panics
///
/// Panics when dividing by zero; use [`Point2::checked_div`] to recover.
impl Div<f64> for Point2 {
    type Output = Point2;
    #[track_caller]
    fn div(self, s: f64) -> Point2 {
        expect_ok(self.checked_div(s))
    }
}

// =============================================================================
// Point3
// =============================================================================

/// A position in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Create a new point.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Drop the z coordinate.
    pub fn to_point2(self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Position vector from the origin to this point.
    pub fn to_vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Divide the coordinates by `s`, failing when `s` is zero.
    pub fn checked_div(self, s: f64) -> Result<Self> {
        let s = check_divisor(s)?;
        Ok(Point3::new(self.x / s, self.y / s, self.z / s))
    }

    /// Distance to `other`.
    pub fn distance(&self, other: Point3) -> f64 {
        (*self - other).mag()
    }

    /// Squared distance to `other`.
    pub fn distance_squared(&self, other: Point3) -> f64 {
        (*self - other).mag_squared()
    }

    /// Linear interpolation, `self * (1 - t) + other * t`.
    ///
    /// Not clamped: `t` outside `[0, 1]` extrapolates along the line.
    pub fn lerp(&self, other: Point3, t: f64) -> Point3 {
        let a = *self * (1.0 - t);
        let b = other * t;
        Point3::new(a.x + b.x, a.y + b.y, a.z + b.z)
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Point3) -> Point3 {
        Point3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Point3) -> Point3 {
        Point3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Component-wise floor.
    pub fn floor(&self) -> Point3 {
        Point3::new(self.x.floor(), self.y.floor(), self.z.floor())
    }

    /// Component-wise ceiling.
    pub fn ceil(&self) -> Point3 {
        Point3::new(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Point3 {
        Point3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }
}

impl Sub for Point3 {
    type Output = Vector3;
    fn sub(self, rhs: Point3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;
    fn add(self, v: Vector3) -> Point3 {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;
    fn sub(self, v: Vector3) -> Point3 {
        Point3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;
    fn mul(self, s: f64) -> Point3 {
        Point3::new(self.x * s, self.y * s, self.z * s)
    }
}

/// # Panics
///
/// Panics when dividing by zero; use [`Point3::checked_div`] to recover.
impl Div<f64> for Point3 {
    type Output = Point3;
    #[track_caller]
    fn div(self, s: f64) -> Point3 {
        expect_ok(self.checked_div(s))
    }
}

impl Index<usize> for Point3 {
    type Output = f64;

    fn index(&self, dim: usize) -> &f64 {
        match dim {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of range: {dim}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use approx::assert_relative_eq;

    fn samples() -> Vec<Point3> {
        vec![
            Point3::origin(),
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-0.5, 8.0, -2.25),
            Point3::new(100.0, -0.125, 4.0),
        ]
    }

    #[test]
    fn test_point_minus_point_is_vector() {
        let v: Vector3 = Point3::new(4.0, 6.0, 8.0) - Point3::new(1.0, 2.0, 3.0);
        assert_eq!(v, Vector3::new(3.0, 4.0, 5.0));
        let w: Vector2 = Point2::new(4.0, 6.0) - Point2::new(1.0, 2.0);
        assert_eq!(w, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_difference_round_trip() {
        for p in samples() {
            for q in samples() {
                assert_eq!(q + (p - q), p);
            }
        }
    }

    #[test]
    fn test_point_offset_by_vector() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let v = Vector3::new(0.5, -1.0, 2.0);
        assert_eq!(p + v, Point3::new(1.5, 0.0, 3.0));
        assert_eq!(p - v, Point3::new(0.5, 2.0, -1.0));
        assert_eq!(Point2::new(1.0, 1.0) + Vector2::new(2.0, 3.0), Point2::new(3.0, 4.0));
        assert_eq!(Point2::new(1.0, 1.0) - Vector2::new(2.0, 3.0), Point2::new(-1.0, -2.0));
    }

    #[test]
    fn test_lerp_endpoints() {
        for p in samples() {
            for q in samples() {
                assert_eq!(p.lerp(q, 0.0), p);
                assert_eq!(p.lerp(q, 1.0), q);
            }
        }
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(-3.0, 5.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_extrapolates() {
        let p = Point3::origin();
        let q = Point3::new(2.0, 0.0, 0.0);
        assert_eq!(p.lerp(q, 0.5), Point3::new(1.0, 0.0, 0.0));
        assert_eq!(p.lerp(q, -1.0), Point3::new(-2.0, 0.0, 0.0));
        assert_eq!(p.lerp(q, 2.0), Point3::new(4.0, 0.0, 0.0));
        // Past q, not clamped to it.
        assert!(p.lerp(q, 1.5).distance(p) > q.distance(p));
        assert_eq!(Point2::origin().lerp(Point2::new(0.0, 1.0), 3.0), Point2::new(0.0, 3.0));
    }

    #[test]
    fn test_distance() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 6.0, 3.0);
        assert_eq!(p.distance(q), 5.0);
        assert_eq!(p.distance_squared(q), 25.0);
        assert_relative_eq!(Point2::new(0.0, 0.0).distance(Point2::new(1.0, 1.0)), 2f64.sqrt());
        assert_eq!(Point2::new(0.0, 0.0).distance_squared(Point2::new(1.0, 1.0)), 2.0);
    }

    #[test]
    fn test_componentwise_ops() {
        let p = Point3::new(1.5, -2.5, 3.0);
        let q = Point3::new(-1.0, 4.0, 3.5);
        assert_eq!(p.min(q), Point3::new(-1.0, -2.5, 3.0));
        assert_eq!(p.max(q), Point3::new(1.5, 4.0, 3.5));
        assert_eq!(p.floor(), Point3::new(1.0, -3.0, 3.0));
        assert_eq!(p.ceil(), Point3::new(2.0, -2.0, 3.0));
        assert_eq!(p.abs(), Point3::new(1.5, 2.5, 3.0));
        assert_eq!(p[1], -2.5);
    }

    #[test]
    fn test_scale_and_convert() {
        let p = Point3::new(2.0, 4.0, 6.0);
        assert_eq!(p * 0.5, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p / 2.0, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p.to_point2(), Point2::new(2.0, 4.0));
        assert_eq!(p.to_vector().to_point(), p);
        assert_eq!(Point2::new(2.0, 4.0) * 0.5, Point2::new(1.0, 2.0));
        assert_eq!(Point2::new(2.0, 4.0) / 4.0, Point2::new(0.5, 1.0));
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(
            Point3::new(1.0, 2.0, 3.0).checked_div(0.0),
            Err(GeometryError::DivisionByZero)
        );
        assert_eq!(
            Point2::new(1.0, 2.0).checked_div(0.0),
            Err(GeometryError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_point3_div_by_zero_panics() {
        let _ = Point3::new(1.0, 2.0, 3.0) / 0.0;
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_point2_div_by_zero_panics() {
        let _ = Point2::new(1.0, 2.0) / 0.0;
    }
}

//! Surface normals.
//!
//! A [`Normal3`] has the same arithmetic as a [`Vector3`] but lives in dual
//! space: it transforms with the inverse transpose of a primal transform. The
//! separate type keeps normals from being mixed into vector or point
//! arithmetic by accident. Conversion in either direction is explicit.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{check_divisor, expect_ok, Result};
use crate::norm;
use crate::vector::Vector3;

/// A direction perpendicular to a surface.
///
/// Orientation is not fixed at construction; use [`Normal3::face_forward`] to
/// pick a hemisphere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Normal3 {
    /// Create a new normal.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with a vector.
    pub fn dot(&self, v: Vector3) -> f64 {
        Vector3::from(*self).dot(v)
    }

    /// Absolute value of the dot product with a vector.
    pub fn abs_dot(&self, v: Vector3) -> f64 {
        self.dot(v).abs()
    }

    /// Euclidean length.
    pub fn mag(&self) -> f64 {
        self.mag_squared().sqrt()
    }

    /// Squared Euclidean length.
    pub fn mag_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Divide by `s`, failing when `s` is zero.
    pub fn checked_div(self, s: f64) -> Result<Self> {
        let s = check_divisor(s)?;
        Ok(Normal3::new(self.x / s, self.y / s, self.z / s))
    }

    /// Unit normal in the same direction.
    ///
    /// Fails for the zero normal and for infinite or NaN components. Finite
    /// inputs of any magnitude normalize without overflow or underflow.
    pub fn try_unit(self) -> Result<Self> {
        let [x, y, z] = norm::unit([self.x, self.y, self.z])?;
        Ok(Normal3::new(x, y, z))
    }

    /// Unit normal in the same direction.
    ///
    /// # Panics
    ///
    /// Panics if the normal has zero magnitude or a non-finite component.
    #[track_caller]
    pub fn unit(self) -> Self {
        expect_ok(self.try_unit())
    }

    /// Orient this normal into the hemisphere of `v`.
    ///
    /// Returns the negation when `self · v < 0`, otherwise `self` unchanged.
    /// A zero dot product keeps the original orientation.
    pub fn face_forward(self, v: Vector3) -> Normal3 {
        if self.dot(v) < 0.0 {
            -self
        } else {
            self
        }
    }
}

impl From<Vector3> for Normal3 {
    fn from(v: Vector3) -> Self {
        Normal3::new(v.x, v.y, v.z)
    }
}

impl From<Normal3> for Vector3 {
    fn from(n: Normal3) -> Self {
        Vector3::new(n.x, n.y, n.z)
    }
}

impl Add for Normal3 {
    type Output = Normal3;
    fn add(self, rhs: Normal3) -> Normal3 {
        Normal3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Normal3 {
    type Output = Normal3;
    fn sub(self, rhs: Normal3) -> Normal3 {
        Normal3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Normal3 {
    type Output = Normal3;
    fn neg(self) -> Normal3 {
        Normal3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Normal3 {
    type Output = Normal3;
    fn mul(self, s: f64) -> Normal3 {
        Normal3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Normal3> for f64 {
    type Output = Normal3;
    fn mul(self, n: Normal3) -> Normal3 {
        n * self
    }
}

/// # Panics
///
/// Panics when dividing by zero; use [`Normal3::checked_div`] to recover.
impl Div<f64> for Normal3 {
    type Output = Normal3;
    #[track_caller]
    fn div(self, s: f64) -> Normal3 {
        expect_ok(self.checked_div(s))
    }
}

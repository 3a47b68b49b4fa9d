//! Free displacement vectors in 2D and 3D.
//!
//! Vectors carry direction and magnitude but no position. They are the only
//! continuous type that may be added to a point.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::error::{check_divisor, expect_ok, Result};
use crate::norm;
use crate::point::Point3;

// =============================================================================
// Vector2
// =============================================================================

/// A 2D displacement vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2 {
    /// Create a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Dot product.
    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn mag(&self) -> f64 {
        self.mag_squared().sqrt()
    }

    /// Squared Euclidean length.
    pub fn mag_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Divide by `s`, failing when `s` is zero.
    pub fn checked_div(self, s: f64) -> Result<Self> {
        let s = check_divisor(s)?;
        Ok(Self::new(self.x / s, self.y / s))
    }

    /// Unit vector in the same direction.
    ///
    /// Fails for the zero vector and for infinite or NaN components. Finite
    /// inputs of any magnitude normalize without overflow or underflow.
    pub fn try_unit(self) -> Result<Self> {
        let [x, y] = norm::unit([self.x, self.y])?;
        Ok(Vector2::new(x, y))
    }

    /// Unit vector in the same direction.
    ///
    /// # Panics
    ///
    /// Panics if the vector has zero magnitude or a non-finite component.
    #[track_caller]
    pub fn unit(self) -> Self {
        expect_ok(self.try_unit())
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, s: f64) -> Vector2 {
        Vector2::new(self.x * s, self.y * s)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

/// # Panics
///
/// Panics when dividing by zero; use [`Vector2::checked_div`] to recover.
impl Div<f64> for Vector2 {
    type Output = Vector2;
    #[track_caller]
    fn div(self, s: f64) -> Vector2 {
        expect_ok(self.checked_div(s))
    }
}

// =============================================================================
// Vector3
// =============================================================================

/// A 3D displacement vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3 {
    /// Create a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Unit vector along +X.
    pub const fn x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Unit vector along +Y.
    pub const fn y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along +Z.
    pub const fn z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Dot product.
    pub fn dot(&self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Absolute value of the dot product.
    pub fn abs_dot(&self, other: Vector3) -> f64 {
        self.dot(other).abs()
    }

    /// Right-handed cross product. `a.cross(b) == -(b.cross(a))`.
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    pub fn mag(&self) -> f64 {
        self.mag_squared().sqrt()
    }

    /// Squared Euclidean length.
    pub fn mag_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Vector3 {
        Vector3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Smallest component value.
    pub fn min_component(&self) -> f64 {
        self.x.min(self.y.min(self.z))
    }

    /// Largest component value.
    pub fn max_component(&self) -> f64 {
        self.x.max(self.y.max(self.z))
    }

    /// Index (0, 1, or 2) of the smallest component. Ties go to the lower index.
    pub fn min_dimension(&self) -> usize {
        if self.x <= self.y && self.x <= self.z {
            0
        } else if self.y <= self.z {
            1
        } else {
            2
        }
    }

    /// Index (0, 1, or 2) of the largest component. Ties go to the lower index.
    pub fn max_dimension(&self) -> usize {
        if self.x >= self.y && self.x >= self.z {
            0
        } else if self.y >= self.z {
            1
        } else {
            2
        }
    }

    /// Divide by `s`, failing when `s` is zero.
    pub fn checked_div(self, s: f64) -> Result<Self> {
        let s = check_divisor(s)?;
        Ok(Vector3::new(self.x / s, self.y / s, self.z / s))
    }

    /// Unit vector in the same direction.
    ///
    /// Fails for the zero vector and for infinite or NaN components. Finite
    /// inputs of any magnitude normalize without overflow or underflow.
    pub fn try_unit(self) -> Result<Self> {
        let [x, y, z] = norm::unit([self.x, self.y, self.z])?;
        Ok(Vector3::new(x, y, z))
    }

    /// Unit vector in the same direction.
    ///
    /// # Panics
    ///
    /// Panics if the vector has zero magnitude or a non-finite component.
    #[track_caller]
    pub fn unit(self) -> Self {
        expect_ok(self.try_unit())
    }

    /// Build two unit vectors `(j, k)` so that `{v̂, j, k}` is a right-handed
    /// orthonormal basis, where `v̂` is this vector normalized.
    ///
    /// The helper axis is taken perpendicular to whichever of X or Y dominates
    /// `v`, which keeps the intermediate away from a degenerate cross product.
    /// `k` is `v̂ × j`.
    pub fn try_coordinate_system(self) -> Result<(Vector3, Vector3)> {
        let v = self.try_unit()?;
        let j = if self.x.abs() > self.y.abs() {
            Vector3::new(-v.z, 0.0, v.x).try_unit()?
        } else {
            Vector3::new(0.0, v.z, -v.y).try_unit()?
        };
        let k = v.cross(j);
        Ok((j, k))
    }

    /// Panicking form of [`Vector3::try_coordinate_system`].
    ///
    /// # Panics
    ///
    /// Panics if the vector has zero magnitude or a non-finite component.
    #[track_caller]
    pub fn coordinate_system(self) -> (Vector3, Vector3) {
        expect_ok(self.try_coordinate_system())
    }

    /// Reinterpret as the position vector of a point.
    pub fn to_point(self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, s: f64) -> Vector3 {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

/// # Panics
///
/// Panics when dividing by zero; use [`Vector3::checked_div`] to recover.
impl Div<f64> for Vector3 {
    type Output = Vector3;
    #[track_caller]
    fn div(self, s: f64) -> Vector3 {
        expect_ok(self.checked_div(s))
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, dim: usize) -> &f64 {
        match dim {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {dim}"),
        }
    }
}

//! Discrete numeric tuples for raster and index arithmetic.
//!
//! [`Vec2`] and [`Vec3`] are plain 2- and 3-component tuples over a
//! [`Scalar`] (`i64` or `f64`). They carry no affine or dual-space meaning and
//! do not convert to the geometric types; pixel coordinates, sample indices,
//! and similar quantities live here.
//!
//! Scalar operands always have the component's own type: `Vec3<i64>` scales by
//! `i64`, `Vec3<f64>` by `f64`.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{expect_ok, GeometryError, Result};
use crate::norm;

/// Component type of a [`Vec2`] or [`Vec3`].
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`. Integer scalars truncate toward zero and saturate.
    fn from_f64(v: f64) -> Self;

    /// Sum, or `None` if it leaves the range of the type.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Product, or `None` if it leaves the range of the type.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Quotient, or `None` for a zero divisor or a quotient outside the range
    /// of the type (`i64::MIN / -1`).
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

impl Scalar for i64 {
    const ZERO: Self = 0;

    fn abs(self) -> Self {
        i64::abs(self)
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        v as i64
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        i64::checked_div(self, rhs)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(v: f64) -> Self {
        v
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        (rhs != 0.0).then(|| self / rhs)
    }
}

/// Sum of component products, failing on integer overflow.
fn checked_dot_of<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> Result<T> {
    a.into_iter()
        .zip(b)
        .try_fold(T::ZERO, |acc, (p, q)| p.checked_mul(q)?.checked_add(acc))
        .ok_or(GeometryError::Overflow)
}

/// Divide every component by `s`, telling a zero divisor apart from overflow.
fn checked_div_of<T: Scalar, const N: usize>(c: [T; N], s: T) -> Result<[T; N]> {
    if s == T::ZERO {
        return Err(GeometryError::DivisionByZero);
    }
    let mut out = c;
    for v in &mut out {
        *v = Scalar::checked_div(*v, s).ok_or(GeometryError::Overflow)?;
    }
    Ok(out)
}

#[inline]
fn min_of<T: Scalar>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
fn max_of<T: Scalar>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Two-component numeric tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
}

/// Three-component numeric tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    /// First component.
    pub x: T,
    /// Second component.
    pub y: T,
    /// Third component.
    pub z: T,
}

/// Integer 2-tuple (pixel coordinates, tile indices).
pub type Vec2Int64 = Vec2<i64>;
/// Float 2-tuple.
pub type Vec2Float64 = Vec2<f64>;
/// Integer 3-tuple.
pub type Vec3Int64 = Vec3<i64>;
/// Float 3-tuple.
pub type Vec3Float64 = Vec3<f64>;

impl<T: Scalar> Vec2<T> {
    /// Create a new tuple.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Squared magnitude, in the component type.
    ///
    /// # Panics
    ///
    /// Panics on integer overflow, in every build profile. Use
    /// [`Vec2::checked_mag_squared`] to recover.
    #[track_caller]
    pub fn mag_squared(&self) -> T {
        expect_ok(self.checked_mag_squared())
    }

    /// Squared magnitude, failing with [`GeometryError::Overflow`] when it
    /// does not fit the component type.
    pub fn checked_mag_squared(&self) -> Result<T> {
        self.checked_dot(*self)
    }

    /// Magnitude. Always computed in `f64`.
    pub fn mag(&self) -> f64 {
        let (x, y) = (self.x.to_f64(), self.y.to_f64());
        (x * x + y * y).sqrt()
    }

    /// Dot product.
    ///
    /// # Panics
    ///
    /// Panics on integer overflow, in every build profile.
    #[track_caller]
    pub fn dot(&self, other: Self) -> T {
        expect_ok(self.checked_dot(other))
    }

    /// Dot product, failing with [`GeometryError::Overflow`] when it does not
    /// fit the component type.
    pub fn checked_dot(&self, other: Self) -> Result<T> {
        checked_dot_of([self.x, self.y], [other.x, other.y])
    }

    /// Divide by `s`.
    ///
    /// Fails with [`GeometryError::DivisionByZero`] when `s` is zero and with
    /// [`GeometryError::Overflow`] when an integer quotient does not fit.
    pub fn checked_div(self, s: T) -> Result<Self> {
        let [x, y] = checked_div_of([self.x, self.y], s)?;
        Ok(Self::new(x, y))
    }
}

impl<T: Scalar> Vec3<T> {
    /// Create a new tuple.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude, in the component type.
    ///
    /// # Panics
    ///
    /// Panics on integer overflow, in every build profile. Use
    /// [`Vec3::checked_mag_squared`] to recover.
    #[track_caller]
    pub fn mag_squared(&self) -> T {
        expect_ok(self.checked_mag_squared())
    }

    /// Squared magnitude, failing with [`GeometryError::Overflow`] when it
    /// does not fit the component type.
    pub fn checked_mag_squared(&self) -> Result<T> {
        self.checked_dot(*self)
    }

    /// Magnitude. Always computed in `f64`.
    pub fn mag(&self) -> f64 {
        let (x, y, z) = (self.x.to_f64(), self.y.to_f64(), self.z.to_f64());
        (x * x + y * y + z * z).sqrt()
    }

    /// Component-wise absolute value.
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Dot product.
    ///
    /// # Panics
    ///
    /// Panics on integer overflow, in every build profile.
    #[track_caller]
    pub fn dot(&self, other: Self) -> T {
        expect_ok(self.checked_dot(other))
    }

    /// Dot product, failing with [`GeometryError::Overflow`] when it does not
    /// fit the component type.
    pub fn checked_dot(&self, other: Self) -> Result<T> {
        checked_dot_of([self.x, self.y, self.z], [other.x, other.y, other.z])
    }

    /// Absolute value of the dot product.
    #[track_caller]
    pub fn abs_dot(&self, other: Self) -> T {
        self.dot(other).abs()
    }

    /// Right-handed cross product.
    ///
    /// The products are formed in `f64` and narrowed back, so large integer
    /// inputs cannot overflow or wrap an intermediate term.
    pub fn cross(&self, other: Self) -> Self {
        let (vx, vy, vz) = (self.x.to_f64(), self.y.to_f64(), self.z.to_f64());
        let (ox, oy, oz) = (other.x.to_f64(), other.y.to_f64(), other.z.to_f64());
        Self::new(
            T::from_f64(vy * oz - vz * oy),
            T::from_f64(vz * ox - vx * oz),
            T::from_f64(vx * oy - vy * ox),
        )
    }

    /// Smallest component value.
    pub fn min_component(&self) -> T {
        min_of(self.x, min_of(self.y, self.z))
    }

    /// Largest component value.
    pub fn max_component(&self) -> T {
        max_of(self.x, max_of(self.y, self.z))
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

    /// Component-wise minimum.
    pub fn min(&self, other: Self) -> Self {
        Self::new(
            min_of(self.x, other.x),
            min_of(self.y, other.y),
            min_of(self.z, other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Self) -> Self {
        Self::new(
            max_of(self.x, other.x),
            max_of(self.y, other.y),
            max_of(self.z, other.z),
        )
    }

    /// Divide by `s`.
    ///
    /// Fails with [`GeometryError::DivisionByZero`] when `s` is zero and with
    /// [`GeometryError::Overflow`] when an integer quotient does not fit.
    pub fn checked_div(self, s: T) -> Result<Self> {
        let [x, y, z] = checked_div_of([self.x, self.y, self.z], s)?;
        Ok(Self::new(x, y, z))
    }
}

impl Vec3<f64> {
    /// Unit tuple in the same direction.
    ///
    /// Fails for the zero tuple and for infinite or NaN components. Finite
    /// inputs of any magnitude normalize without overflow or underflow.
    pub fn try_unit(self) -> Result<Self> {
        let [x, y, z] = norm::unit([self.x, self.y, self.z])?;
        Ok(Self::new(x, y, z))
    }

    /// Unit tuple in the same direction.
    ///
    /// # Panics
    ///
    /// Panics if the tuple has zero magnitude or a non-finite component.
    #[track_caller]
    pub fn unit(self) -> Self {
        expect_ok(self.try_unit())
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

/// # Panics
///
/// Panics when dividing by zero, for integer and float components alike, and
/// on integer overflow (`i64::MIN / -1`).
impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;
    #[track_caller]
    fn div(self, s: T) -> Self {
        expect_ok(self.checked_div(s))
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Neg for Vec3<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;
    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

/// # Panics
///
/// Panics when dividing by zero, for integer and float components alike, and
/// on integer overflow (`i64::MIN / -1`).
impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;
    #[track_caller]
    fn div(self, s: T) -> Self {
        expect_ok(self.checked_div(s))
    }
}

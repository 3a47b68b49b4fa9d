#![warn(missing_docs)]

//! Math value types for the lumen ray kernel.
//!
//! Three continuous families are kept apart at the type level:
//!
//! - [`Vector2`], [`Vector3`]: free displacements
//! - [`Point2`], [`Point3`]: affine positions (`point - point = vector`)
//! - [`Normal3`]: dual-space surface normals
//!
//! [`Vec2`] and [`Vec3`] are generic numeric tuples over `i64` or `f64` for
//! raster and index arithmetic, unrelated to the geometric types.
//!
//! Division by zero, normalizing a zero-length or non-finite value and
//! integer overflow in the discrete tuples are caller errors. Operators panic
//! on them; the `checked_*` / `try_unit` forms return [`GeometryError`]
//! instead. Normalization scales by the largest component first, so any
//! finite nonzero input yields a finite unit result.
//!
//! # Example
//!
//! ```
//! use lumen_kernel_math::{Point3, Vector3};
//!
//! let p = Point3::new(1.0, 2.0, 3.0);
//! let q = Point3::new(4.0, 6.0, 3.0);
//! let d: Vector3 = q - p;
//! assert_eq!(d.mag(), 5.0);
//! assert_eq!(p + d, q);
//! ```

mod convert;
pub mod error;
mod norm;
mod normal;
mod point;
pub mod tuple;
mod vector;

pub use error::{GeometryError, Result};
pub use normal::Normal3;
pub use point::{Point2, Point3};
pub use tuple::{Scalar, Vec2, Vec2Float64, Vec2Int64, Vec3, Vec3Float64, Vec3Int64};
pub use vector::{Vector2, Vector3};

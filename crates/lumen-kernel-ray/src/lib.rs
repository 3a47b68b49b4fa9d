#![warn(missing_docs)]

//! Parametric rays for the lumen ray kernel.
//!
//! # Architecture
//!
//! - [`Ray`] - origin, direction, parametric domain `[t_min, t_max)`, and a
//!   borrowed [`Medium`]
//! - [`RayDifferential`] - a ray plus x/y auxiliary rays for footprint
//!   estimation, gated on a validity flag
//!
//! Intersection routines live outside the kernel. They consume rays and hand
//! back hit parameters, which [`Ray::at`] turns into points.
//!
//! # Example
//!
//! ```
//! use lumen_kernel_math::{Point3, Vector3};
//! use lumen_kernel_ray::Ray;
//!
//! let ray = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
//! assert_eq!(ray.at(5.0), Point3::new(5.0, 0.0, 0.0));
//! ```

mod differential;
mod medium;
mod ray;

pub use differential::RayDifferential;
pub use medium::Medium;
pub use ray::Ray;

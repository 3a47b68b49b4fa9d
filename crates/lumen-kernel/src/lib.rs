//! lumen: geometric value-type kernel for ray-based rendering.
//!
//! Re-exports the math and ray crates under one roof.
//!
//! # Example
//!
//! ```
//! use lumen_kernel::{Normal3, Point3, Ray, Vector3};
//!
//! let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
//! let hit = ray.at(4.0);
//! assert_eq!(hit, Point3::new(0.0, 0.0, -1.0));
//!
//! // Orient the surface normal against the incoming ray.
//! let n = Normal3::new(0.0, 0.0, 1.0).face_forward(-ray.direction);
//! assert_eq!(n, Normal3::new(0.0, 0.0, -1.0));
//! ```

pub use lumen_kernel_math::*;
pub use lumen_kernel_ray::*;

/// Math types, also available at the crate root.
pub mod math {
    pub use lumen_kernel_math::*;
}

/// Ray types, also available at the crate root.
pub mod ray {
    pub use lumen_kernel_ray::*;
}

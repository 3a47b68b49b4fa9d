//! Parametric rays.

use lumen_kernel_math::{Point3, Vector3};

use crate::medium::Medium;

/// A ray `origin + t * direction` with valid parameters in `[t_min, t_max)`.
///
/// `t_max` may be infinite. The direction is stored as given and is not
/// normalized.
#[derive(Debug, Clone, Copy)]
pub struct Ray<'m> {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray.
    pub direction: Vector3,
    /// Start of the parametric domain.
    pub t_min: f64,
    /// End of the parametric domain (exclusive).
    pub t_max: f64,
    /// Medium containing the origin, if any. Borrowed, never owned.
    pub medium: Option<&'m dyn Medium>,
}

impl<'m> Ray<'m> {
    /// Create a ray over `[0, ∞)` with no medium.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction,
            t_min: 0.0,
            t_max: f64::INFINITY,
            medium: None,
        }
    }

    /// The same ray with its domain replaced by `[t_min, t_max)`.
    pub fn with_extent(self, t_min: f64, t_max: f64) -> Self {
        Self {
            t_min,
            t_max,
            ..self
        }
    }

    /// The same ray travelling through `medium`.
    pub fn with_medium(self, medium: &'m dyn Medium) -> Self {
        Self {
            medium: Some(medium),
            ..self
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + direction * t`.
    ///
    /// `t` is not checked against the domain; see [`Ray::in_domain`].
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Whether `t` lies in `[t_min, t_max)`.
    #[inline]
    pub fn in_domain(&self, t: f64) -> bool {
        t >= self.t_min && t < self.t_max
    }
}

impl Default for Ray<'_> {
    fn default() -> Self {
        Ray::new(Point3::origin(), Vector3::zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[derive(Debug)]
    struct Fog;

    impl Medium for Fog {}

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(5.0), Point3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_at_unnormalized_direction() {
        let ray = Ray::new(Point3::new(1.0, 1.0, 1.0), Vector3::new(0.0, 2.0, -4.0));
        assert_eq!(ray.at(0.5), Point3::new(1.0, 2.0, -1.0));
        assert_eq!(ray.at(0.0), ray.origin);
    }

    #[test]
    fn test_at_does_not_clamp() {
        let ray = Ray::new(Point3::origin(), Vector3::z()).with_extent(1.0, 2.0);
        assert_eq!(ray.at(-3.0), Point3::new(0.0, 0.0, -3.0));
        assert_eq!(ray.at(10.0), Point3::new(0.0, 0.0, 10.0));
        assert!(!ray.in_domain(-3.0));
        assert!(!ray.in_domain(10.0));
    }

    #[test]
    fn test_domain_is_half_open() {
        let ray = Ray::new(Point3::origin(), Vector3::x()).with_extent(0.5, 4.0);
        assert!(ray.in_domain(0.5));
        assert!(ray.in_domain(3.999));
        assert!(!ray.in_domain(4.0));
        assert!(!ray.in_domain(0.25));
    }

    #[test]
    fn test_default_domain_is_unbounded() {
        let ray = Ray::default();
        assert_eq!(ray.t_min, 0.0);
        assert!(ray.t_max.is_infinite());
        assert!(ray.in_domain(1e300));
        assert!(ray.medium.is_none());
    }

    #[test]
    fn test_with_medium_borrows() {
        let fog = Fog;
        let ray = Ray::new(Point3::origin(), Vector3::y()).with_medium(&fog);
        assert!(ray.medium.is_some());
        assert_relative_eq!(ray.at(2.0).y, 2.0);
        let copy = ray;
        assert_eq!(format!("{:?}", copy.medium.unwrap()), "Fog");
    }
}

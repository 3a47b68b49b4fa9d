//! Rays carrying two auxiliary rays for filter footprint estimation.

use log::trace;
use lumen_kernel_math::{Point3, Vector3};

use crate::medium::Medium;
use crate::ray::Ray;

/// A main ray plus two auxiliary rays offset by one sample step in x and y on
/// the film plane.
///
/// The auxiliary fields are meaningful only while `has_differentials` is set.
/// When it is clear they hold zeros or stale data and must not be used for
/// footprint estimation; [`RayDifferential::rx`] and [`RayDifferential::ry`]
/// enforce this, the raw fields do not.
#[derive(Debug, Clone, Copy)]
pub struct RayDifferential<'m> {
    /// The main ray.
    pub ray: Ray<'m>,
    /// Whether the auxiliary rays below were computed.
    pub has_differentials: bool,
    /// Origin of the ray offset by one sample in x.
    pub rx_origin: Point3,
    /// Origin of the ray offset by one sample in y.
    pub ry_origin: Point3,
    /// Direction of the ray offset by one sample in x.
    pub rx_direction: Vector3,
    /// Direction of the ray offset by one sample in y.
    pub ry_direction: Vector3,
}

impl<'m> RayDifferential<'m> {
    /// Wrap `ray` together with its two auxiliary rays.
    pub fn with_differentials(
        ray: Ray<'m>,
        rx_origin: Point3,
        rx_direction: Vector3,
        ry_origin: Point3,
        ry_direction: Vector3,
    ) -> Self {
        Self {
            ray,
            has_differentials: true,
            rx_origin,
            ry_origin,
            rx_direction,
            ry_direction,
        }
    }

    /// The main ray.
    pub fn ray(&self) -> Ray<'m> {
        self.ray
    }

    /// Origin of the main ray.
    pub fn origin(&self) -> Point3 {
        self.ray.origin
    }

    /// Direction of the main ray.
    pub fn direction(&self) -> Vector3 {
        self.ray.direction
    }

    /// Start of the main ray's domain.
    pub fn t_min(&self) -> f64 {
        self.ray.t_min
    }

    /// End of the main ray's domain.
    pub fn t_max(&self) -> f64 {
        self.ray.t_max
    }

    /// Medium of the main ray.
    pub fn medium(&self) -> Option<&'m dyn Medium> {
        self.ray.medium
    }

    /// Evaluate the main ray at `t`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.ray.at(t)
    }

    /// Whether `t` lies in the main ray's domain.
    #[inline]
    pub fn in_domain(&self, t: f64) -> bool {
        self.ray.in_domain(t)
    }

    /// The x-offset auxiliary ray, or `None` if differentials were not computed.
    ///
    /// It shares the main ray's domain and medium.
    pub fn rx(&self) -> Option<Ray<'m>> {
        self.has_differentials.then(|| Ray {
            origin: self.rx_origin,
            direction: self.rx_direction,
            ..self.ray
        })
    }

    /// The y-offset auxiliary ray, or `None` if differentials were not computed.
    ///
    /// It shares the main ray's domain and medium.
    pub fn ry(&self) -> Option<Ray<'m>> {
        self.has_differentials.then(|| Ray {
            origin: self.ry_origin,
            direction: self.ry_direction,
            ..self.ray
        })
    }

    /// Rescale the auxiliary rays' offsets from the main ray by `s`.
    ///
    /// Used when the sampling rate differs from one sample per pixel, with
    /// `s = 1 / sqrt(samples_per_pixel)`. Returns `self` unchanged when no
    /// differentials are present.
    pub fn scale_differentials(&self, s: f64) -> Self {
        if !self.has_differentials {
            return *self;
        }
        trace!("scaling ray differentials by {s}");
        let o = self.ray.origin;
        let d = self.ray.direction;
        Self {
            rx_origin: o + (self.rx_origin - o) * s,
            ry_origin: o + (self.ry_origin - o) * s,
            rx_direction: d + (self.rx_direction - d) * s,
            ry_direction: d + (self.ry_direction - d) * s,
            ..*self
        }
    }
}

impl<'m> From<Ray<'m>> for RayDifferential<'m> {
    /// A differential without auxiliary rays; the auxiliary fields are zero.
    fn from(ray: Ray<'m>) -> Self {
        Self {
            ray,
            has_differentials: false,
            rx_origin: Point3::origin(),
            ry_origin: Point3::origin(),
            rx_direction: Vector3::zeros(),
            ry_direction: Vector3::zeros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera_ray() -> RayDifferential<'static> {
        RayDifferential::with_differentials(
            Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0)),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.5, 0.0, 1.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.25, 1.0),
        )
    }

    #[test]
    fn test_from_ray_has_no_differentials() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::x());
        let rd = RayDifferential::from(ray);
        assert!(!rd.has_differentials);
        assert!(rd.rx().is_none());
        assert!(rd.ry().is_none());
        assert_eq!(rd.rx_direction, Vector3::zeros());
    }

    #[test]
    fn test_delegates_to_main_ray() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::y()).with_extent(0.1, 9.0);
        let rd = RayDifferential::from(ray);
        assert_eq!(rd.at(2.0), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(rd.origin(), ray.origin);
        assert_eq!(rd.direction(), ray.direction);
        assert_eq!(rd.t_min(), 0.1);
        assert_eq!(rd.t_max(), 9.0);
        assert!(rd.in_domain(5.0));
        assert!(!rd.in_domain(9.0));
        assert!(rd.medium().is_none());
        assert_eq!(rd.ray().at(1.0), ray.at(1.0));
    }

    #[test]
    fn test_auxiliary_rays_when_present() {
        let rd = camera_ray();
        let rx = rd.rx().unwrap();
        let ry = rd.ry().unwrap();
        assert_eq!(rx.direction, Vector3::new(0.5, 0.0, 1.0));
        assert_eq!(ry.direction, Vector3::new(0.0, 0.25, 1.0));
        assert_eq!(rx.at(2.0), Point3::new(1.0, 0.0, 2.0));
        assert!(rx.t_max.is_infinite());
    }

    #[test]
    fn test_scale_differentials() {
        let scaled = camera_ray().scale_differentials(0.5);
        assert!(scaled.has_differentials);
        assert_relative_eq!(scaled.rx_direction.x, 0.25);
        assert_relative_eq!(scaled.rx_direction.z, 1.0);
        assert_relative_eq!(scaled.ry_direction.y, 0.125);
        assert_eq!(scaled.rx_origin, Point3::origin());
        // Main ray untouched.
        assert_eq!(scaled.direction(), Vector3::z());
    }

    #[test]
    fn test_scale_without_differentials_is_identity() {
        let rd = RayDifferential::from(Ray::new(Point3::origin(), Vector3::x()));
        let scaled = rd.scale_differentials(0.25);
        assert!(!scaled.has_differentials);
        assert_eq!(scaled.rx_origin, rd.rx_origin);
        assert_eq!(scaled.rx_direction, Vector3::zeros());
    }
}

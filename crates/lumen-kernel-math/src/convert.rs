//! Conversions to and from nalgebra, for handing values to transform code.
//!
//! Normals convert to plain `nalgebra::Vector3`; the caller is responsible for
//! applying the inverse transpose.

use crate::normal::Normal3;
use crate::point::{Point2, Point3};
use crate::vector::{Vector2, Vector3};

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Point3> for nalgebra::Point3<f64> {
    fn from(p: Point3) -> Self {
        nalgebra::Point3::new(p.x, p.y, p.z)
    }
}

impl From<nalgebra::Point3<f64>> for Point3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(p: Point2) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Normal3> for nalgebra::Vector3<f64> {
    fn from(n: Normal3) -> Self {
        nalgebra::Vector3::new(n.x, n.y, n.z)
    }
}

impl From<nalgebra::Vector3<f64>> for Normal3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Normal3::new(v.x, v.y, v.z)
    }
}

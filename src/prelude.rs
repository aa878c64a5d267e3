pub use crate::camera::Camera;
pub use crate::color::{Color, Image, PpmFormat};
pub use crate::error::{RenderError, RenderResult};
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::interval::Interval;
pub use crate::material::{Material, Response, Scatter};
pub use crate::ray::Ray;
pub use crate::renderer::RenderSettings;
pub use crate::scene::{Object, Scene};
pub use crate::shape::{Plane, Shape, Sphere, Triangle};
pub use crate::vec3::{Point3, Vec3};

/// Lower bound of every hit interval; keeps secondary rays off their own surface.
pub const T_MIN: f64 = 1e-4;
/// Finite far bound of every hit interval.
pub const T_MAX: f64 = 1000.0;

pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

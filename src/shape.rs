//! Analytic intersection tests for the three supported primitives.
//!
//! Each test reports a hit only when the ray parameter falls inside the
//! caller's interval. Degenerate inputs (zero radius, collinear triangle
//! vertices, rays parallel to a plane) are not errors; they simply never hit.

use crate::prelude::*;

/// Below this `|n · d|` a ray is treated as parallel to a plane.
const PLANE_PARALLEL_EPSILON: f64 = 1e-6;
/// Below this determinant a ray is treated as parallel to a triangle.
const TRIANGLE_PARALLEL_EPSILON: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn hit<'a>(&self, r: &Ray, ray_t: Interval, mat: &'a Material) -> Option<HitRecord<'a>> {
        if self.radius <= 0.0 {
            return None;
        }

        let oc = r.orig - self.center;
        let a = r.dir.length_squared();
        let half_b = oc.dot(r.dir);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;
        Some(HitRecord::new(r, root, outward_normal, mat))
    }
}

/// Infinite two-sided plane through `point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
}

impl Plane {
    /// `normal` is normalized here so hit records always carry a unit normal.
    pub fn new(point: Point3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalized(),
        }
    }

    pub fn hit<'a>(&self, r: &Ray, ray_t: Interval, mat: &'a Material) -> Option<HitRecord<'a>> {
        let denominator = self.normal.dot(r.dir);
        if denominator.abs() < PLANE_PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - r.orig).dot(self.normal) / denominator;
        if !ray_t.contains(t) {
            return None;
        }

        Some(HitRecord::new(r, t, self.normal, mat))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
}

impl Triangle {
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Möller-Trumbore. Edges and vertices (u = 0, v = 0, u + v = 1) count as hits.
    pub fn hit<'a>(&self, r: &Ray, ray_t: Interval, mat: &'a Material) -> Option<HitRecord<'a>> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        let pvec = r.dir.cross(edge2);
        let det = edge1.dot(pvec);
        if det.abs() < TRIANGLE_PARALLEL_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = r.orig - self.v0;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = r.dir.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        if !ray_t.contains(t) {
            return None;
        }

        let outward_normal = edge1.cross(edge2).normalized();
        Some(HitRecord::new(r, t, outward_normal, mat))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Shape {
    pub fn hit<'a>(&self, r: &Ray, ray_t: Interval, mat: &'a Material) -> Option<HitRecord<'a>> {
        match self {
            Shape::Sphere(s) => s.hit(r, ray_t, mat),
            Shape::Plane(p) => p.hit(r, ray_t, mat),
            Shape::Triangle(tri) => tri.hit(r, ray_t, mat),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Triangle> for Shape {
    fn from(tri: Triangle) -> Self {
        Shape::Triangle(tri)
    }
}

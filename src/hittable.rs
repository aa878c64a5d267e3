use crate::prelude::*;

/// Where a ray met a surface. Lives only as long as the scene it borrows from.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub p: Point3,
    /// Unit length, always facing against the incoming ray.
    pub normal: Vec3,
    pub t: f64,
    pub mat: &'a Material,
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Builds a record from the geometric outward normal, flipping it when the
    /// ray arrives from behind. A ray grazing the surface counts as front-facing.
    #[inline]
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3, mat: &'a Material) -> Self {
        let front_face = r.dir.dot(outward_normal) <= 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p: r.at(t),
            normal,
            t,
            mat,
            front_face,
        }
    }
}

pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter inside `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_face_flips_normal() {
        let mat = Material::lambertian(Color::ONE);
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let rec = HitRecord::new(&r, 2.0, Vec3::new(0.0, 0.0, 1.0), &mat);
        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(rec.p, Point3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_front_face_keeps_normal() {
        let mat = Material::lambertian(Color::ONE);
        let r = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&r, 1.0, Vec3::new(0.0, 0.0, 1.0), &mat);
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
    }
}

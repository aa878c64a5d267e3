use crate::prelude::*;

/// Half-line `origin + t * direction`. The direction is not required to be unit length.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub orig: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            orig: origin,
            dir: direction,
        }
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.orig + t * self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_walks_along_direction() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(r.at(0.0), r.orig);
        assert_eq!(r.at(1.5), Point3::new(1.0, 2.0, 0.0));
    }
}

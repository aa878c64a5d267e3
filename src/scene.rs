use crate::prelude::*;

/// A surface paired with the material it is made of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object {
    pub shape: Shape,
    pub material: Material,
}

impl Object {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }
}

impl Hittable for Object {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        self.shape.hit(r, ray_t, &self.material)
    }
}

/// Ordered, read-only list of objects. Every ray is tested against all of them.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub objects: Vec<Object>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn add(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromIterator<Object> for Scene {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Hittable for Scene {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_hitrecord: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in self.objects.iter() {
            if let Some(hit_rec) = object.hit(r, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit_rec.t;
                closest_hitrecord = Some(hit_rec);
            }
        }

        closest_hitrecord
    }
}

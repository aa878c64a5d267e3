use crate::prelude::*;
use rand::Rng;

/// Pinhole camera. Pixel `(i, j)` sits at `pixel00_loc + i * pixel_delta_u + j * pixel_delta_v`,
/// with `i` running left to right and `j` bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,

    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Frustum form: `horizontal` and `vertical` span the whole image plane and
    /// `lower_left_corner` is the center of pixel (0, 0).
    pub fn new(
        center: Point3,
        lower_left_corner: Point3,
        horizontal: Vec3,
        vertical: Vec3,
        image_width: u32,
        image_height: u32,
        samples_per_pixel: u32,
    ) -> RenderResult<Self> {
        if image_width == 0 || image_height == 0 {
            return Err(RenderError::InvalidImageSize {
                width: image_width,
                height: image_height,
            });
        }
        if samples_per_pixel == 0 {
            return Err(RenderError::InvalidSampleCount);
        }

        Ok(Self {
            image_width,
            image_height,
            samples_per_pixel,
            center,
            pixel00_loc: lower_left_corner,
            pixel_delta_u: horizontal / image_width as f64,
            pixel_delta_v: vertical / image_height as f64,
        })
    }

    /// Field-of-view form with a unit focal length. `vfov` is in degrees.
    pub fn look_at(
        lookfrom: Point3,
        lookat: Point3,
        vup: Vec3,
        vfov: f64,
        image_width: u32,
        image_height: u32,
        samples_per_pixel: u32,
    ) -> RenderResult<Self> {
        let h = (degrees_to_radians(vfov) / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width =
            viewport_height * (image_width as f64 / image_height.max(1) as f64);

        let view = lookfrom - lookat;
        if view.near_zero() || vup.cross(view).near_zero() {
            return Err(RenderError::DegenerateView);
        }
        let w = view.normalized();
        let u = vup.cross(w).normalized();
        let v = w.cross(u);

        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let pixel_delta_u = horizontal / image_width.max(1) as f64;
        let pixel_delta_v = vertical / image_height.max(1) as f64;

        let viewport_lower_left = lookfrom - w - horizontal / 2.0 - vertical / 2.0;
        let pixel00_loc = viewport_lower_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Self::new(
            lookfrom,
            pixel00_loc,
            horizontal,
            vertical,
            image_width,
            image_height,
            samples_per_pixel,
        )
    }

    /// Primary ray through a jittered point of pixel `(i, j)`.
    pub fn get_ray<R: Rng + ?Sized>(&self, i: u32, j: u32, rng: &mut R) -> Ray {
        let (du, dv) = Self::sample_square(rng);
        self.get_ray_with_offset(i, j, du, dv)
    }

    /// Primary ray through pixel `(i, j)` shifted by `(du, dv)` pixel widths.
    pub fn get_ray_with_offset(&self, i: u32, j: u32, du: f64, dv: f64) -> Ray {
        let pixel_sample = self.pixel00_loc
            + ((i as f64 + du) * self.pixel_delta_u)
            + ((j as f64 + dv) * self.pixel_delta_v);
        Ray::new(self.center, pixel_sample - self.center)
    }

    fn sample_square<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
        (rng.random_range(-0.5..=0.5), rng.random_range(-0.5..=0.5))
    }
}

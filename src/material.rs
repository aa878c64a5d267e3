//! Scattering policies.
//!
//! Two models coexist. The stochastic one (`Lambertian`, `Metal`,
//! `Dielectric`) multiplies the light coming back along the scattered ray by
//! an attenuation color. The reflectivity model (`Reflective`) mirrors the ray
//! deterministically and blends its own color with what the mirror sees.
//! Both are expressed through [`Scatter`], so the integrator never needs to
//! know which one a surface uses.

use crate::prelude::*;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Lambertian { albedo: Color },
    Metal { albedo: Color, fuzz: f64 },
    Dielectric { ior: f64 },
    Reflective { color: Color, reflectivity: f64 },
}

/// How a surface weights the radiance arriving along its outgoing ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    Attenuate(Color),
    Blend { base: Color, reflectivity: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub ray: Ray,
    pub response: Response,
}

impl Scatter {
    /// Folds the radiance traced along `self.ray` into this surface's color.
    pub fn combine(&self, incoming: Color) -> Color {
        match self.response {
            Response::Attenuate(attenuation) => attenuation * incoming,
            Response::Blend { base, reflectivity } => {
                (1.0 - reflectivity) * base + reflectivity * incoming
            }
        }
    }
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// `fuzz` is clamped to [0, 1]; 0 is a perfect mirror.
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn dielectric(ior: f64) -> Self {
        Material::Dielectric { ior }
    }

    /// `reflectivity` is clamped to [0, 1]; 0 is flat `color`, 1 a perfect mirror.
    pub fn reflective(color: Color, reflectivity: f64) -> Self {
        Material::Reflective {
            color,
            reflectivity: reflectivity.clamp(0.0, 1.0),
        }
    }

    /// Returns `None` when the ray is absorbed.
    pub fn scatter<R: Rng + ?Sized>(
        &self,
        r_in: &Ray,
        rec: &HitRecord,
        rng: &mut R,
    ) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => {
                let mut scatter_direction = rec.normal + Vec3::random_unit_vector(rng);
                if scatter_direction.near_zero() {
                    scatter_direction = rec.normal;
                }
                Some(Scatter {
                    ray: Ray::new(rec.p, scatter_direction.normalized()),
                    response: Response::Attenuate(albedo),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = Vec3::reflect(r_in.dir.normalized(), rec.normal)
                    + fuzz * Vec3::random_unit_vector(rng);
                // Fuzz can push the ray below the surface; those are absorbed.
                if reflected.dot(rec.normal) <= 0.0 {
                    return None;
                }
                Some(Scatter {
                    ray: Ray::new(rec.p, reflected),
                    response: Response::Attenuate(albedo),
                })
            }
            Material::Dielectric { ior } => {
                let ri = if rec.front_face { 1.0 / ior } else { ior };
                let unit_direction = r_in.dir.normalized();
                let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

                let direction = if ri * sin_theta > 1.0 {
                    Vec3::reflect(unit_direction, rec.normal)
                } else {
                    Vec3::refract(unit_direction, rec.normal, ri)
                };
                Some(Scatter {
                    ray: Ray::new(rec.p, direction),
                    response: Response::Attenuate(Color::ONE),
                })
            }
            Material::Reflective {
                color,
                reflectivity,
            } => Some(Scatter {
                ray: Ray::new(rec.p, Vec3::reflect(r_in.dir.normalized(), rec.normal)),
                response: Response::Blend {
                    base: color,
                    reflectivity,
                },
            }),
        }
    }
}

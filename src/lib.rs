//! Brute-force CPU ray tracer.
//!
//! A [`Scene`] is a flat list of spheres, planes and triangles, each with a
//! [`Material`]. The [`Camera`] turns pixels into jittered primary rays,
//! [`renderer::ray_color`] follows them recursively, and [`renderer::render`]
//! averages the samples into an [`Image`] that can be written as PPM.

pub mod camera;
pub mod color;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod material;
pub mod prelude;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod shape;
pub mod vec3;

pub use prelude::*;
pub use renderer::{ray_color, render, render_pixel};

//! Radiance integrator and frame driver.
//!
//! Scanlines are rendered in parallel with rayon. Every pixel draws from its
//! own `StdRng` seeded by `(seed, i, j)`, so the image depends only on the
//! inputs and never on thread scheduling.

use crate::prelude::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

const SKY_WHITE: Color = Color::new(1.0, 1.0, 1.0);
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Bounce limit. A depth of 0 renders every pixel black.
    pub max_depth: u32,
    pub seed: u64,
    /// Worker count; `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: 10,
            seed: 0,
            threads: None,
        }
    }
}

/// Color arriving at the origin of `r`, following at most `depth` bounces.
pub fn ray_color<H, R>(world: &H, r: &Ray, depth: u32, rng: &mut R) -> Color
where
    H: Hittable + ?Sized,
    R: Rng + ?Sized,
{
    if depth == 0 {
        return Color::ZERO;
    }

    if let Some(rec) = world.hit(r, Interval::new(T_MIN, T_MAX)) {
        return match rec.mat.scatter(r, &rec, rng) {
            Some(scatter) => scatter.combine(ray_color(world, &scatter.ray, depth - 1, rng)),
            None => Color::ZERO,
        };
    }

    sky_gradient(r)
}

/// Background: white looking straight down, sky blue looking straight up.
pub fn sky_gradient(r: &Ray) -> Color {
    let unit_direction = r.dir.normalized();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * SKY_WHITE + a * SKY_BLUE
}

/// Seed for the random stream owned by pixel `(i, j)`.
pub fn pixel_seed(seed: u64, i: u32, j: u32) -> u64 {
    let pixel = ((j as u64) << 32) | i as u64;
    seed.rotate_left(17) ^ pixel.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Average of `samples_per_pixel` jittered samples through pixel `(i, j)`.
pub fn render_pixel<H>(world: &H, camera: &Camera, i: u32, j: u32, settings: &RenderSettings) -> Color
where
    H: Hittable + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(pixel_seed(settings.seed, i, j));
    let mut pixel_color = Color::ZERO;
    for _ in 0..camera.samples_per_pixel {
        let r = camera.get_ray(i, j, &mut rng);
        pixel_color += ray_color(world, &r, settings.max_depth, &mut rng);
    }
    pixel_color / camera.samples_per_pixel as f64
}

/// Renders the whole frame, top scanline first.
pub fn render<H>(world: &H, camera: &Camera, settings: &RenderSettings) -> RenderResult<Image>
where
    H: Hittable + ?Sized,
{
    let width = camera.image_width;
    let height = camera.image_height;
    info!(
        "Rendering {}x{} at {} spp, max depth {}, seed {}, {} threads",
        width,
        height,
        camera.samples_per_pixel,
        settings.max_depth,
        settings.seed,
        settings.threads.unwrap_or_else(rayon::current_num_threads)
    );
    let start = Instant::now();
    let remaining = AtomicU32::new(height);

    let render_rows = || -> Vec<Vec<Color>> {
        (0..height)
            .into_par_iter()
            .map(|row| {
                let j = height - 1 - row;
                let scanline: Vec<Color> = (0..width)
                    .map(|i| render_pixel(world, camera, i, j, settings))
                    .collect();
                let left = remaining.fetch_sub(1, Ordering::Relaxed) - 1;
                debug!("Scanlines remaining: {}", left);
                scanline
            })
            .collect()
    };

    let scanlines = match settings.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(render_rows)
        }
        None => render_rows(),
    };

    info!("Render finished in {:.2?}", start.elapsed());
    Image::from_pixels(width, height, scanlines.into_iter().flatten().collect())
}

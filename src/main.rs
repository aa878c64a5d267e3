use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use scanline::{PpmFormat, RenderSettings, render, scenes};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneChoice {
    /// Lambertian, metal and glass surfaces.
    Materials,
    /// The same layout with reflectivity-blend surfaces.
    Reflective,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Ascii,
    Binary,
}

impl From<Format> for PpmFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Ascii => PpmFormat::Ascii,
            Format::Binary => PpmFormat::Binary,
        }
    }
}

/// Render a built-in scene to a PPM image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Jittered samples averaged per pixel
    #[arg(short, long, default_value_t = 100)]
    samples: u32,

    /// Maximum number of bounces per path
    #[arg(short = 'd', long, default_value_t = 10)]
    max_depth: u32,

    /// Base seed for the per-pixel random streams
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Render threads (defaults to one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    #[arg(long, value_enum, default_value_t = SceneChoice::Materials)]
    scene: SceneChoice,

    #[arg(long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Apply gamma 2 before quantizing
    #[arg(long)]
    gamma: bool,

    /// Output file; writes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let world = match args.scene {
        SceneChoice::Materials => scenes::materials(),
        SceneChoice::Reflective => scenes::reflective(),
    };
    let camera = scenes::default_camera(args.width, args.height, args.samples)
        .context("invalid camera settings")?;
    let settings = RenderSettings {
        max_depth: args.max_depth,
        seed: args.seed,
        threads: args.threads,
    };

    info!("Scene {:?} with {} objects", args.scene, world.len());
    let image = render(&world, &camera, &settings)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    image
        .write_ppm(&mut out, args.format.into(), args.gamma)
        .context("writing image")?;

    if let Some(path) = &args.output {
        info!("Wrote {}", path.display());
    }
    Ok(())
}

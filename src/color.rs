//! Final pixel storage and PPM encoding.

use crate::prelude::*;
use std::io::{self, Write};

pub type Color = Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PpmFormat {
    /// `P3`: one `r g b` text line per pixel.
    #[default]
    Ascii,
    /// `P6`: three raw bytes per pixel.
    Binary,
}

impl PpmFormat {
    fn magic(self) -> &'static str {
        match self {
            PpmFormat::Ascii => "P3",
            PpmFormat::Binary => "P6",
        }
    }
}

#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Quantizes a [0, 1) channel as `floor(255.999 * c)`. Out-of-range values are
/// clamped first and NaN becomes 0.
#[inline]
pub fn to_byte(channel: f64) -> u8 {
    const INTENSITY: Interval = Interval::new(0.000, 0.999);
    if channel.is_nan() {
        return 0;
    }
    (255.999 * INTENSITY.clamp(channel)) as u8
}

pub fn color_to_rgb(pixel_color: Color, gamma: bool) -> [u8; 3] {
    let adjust = |c: f64| if gamma { linear_to_gamma(c) } else { c };
    [
        to_byte(adjust(pixel_color.x)),
        to_byte(adjust(pixel_color.y)),
        to_byte(adjust(pixel_color.z)),
    ]
}

/// Rendered frame. `pixels` are in output order: top scanline first, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Image {
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> RenderResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RenderError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Color at column `x`, with `row` 0 being the top scanline.
    pub fn get(&self, x: u32, row: u32) -> Color {
        self.pixels[row as usize * self.width as usize + x as usize]
    }

    pub fn write_ppm<W: Write>(&self, out: &mut W, format: PpmFormat, gamma: bool) -> io::Result<()> {
        writeln!(out, "{}", format.magic())?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;

        for &pixel_color in &self.pixels {
            let [r, g, b] = color_to_rgb(pixel_color, gamma);
            match format {
                PpmFormat::Ascii => writeln!(out, "{} {} {}", r, g, b)?,
                PpmFormat::Binary => out.write_all(&[r, g, b])?,
            }
        }

        out.flush()
    }

    pub fn to_ppm_bytes(&self, format: PpmFormat, gamma: bool) -> Vec<u8> {
        let mut buf = Vec::with_capacity(16 + self.pixels.len() * 12);
        let _ = self.write_ppm(&mut buf, format, gamma);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantization() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.5), 127);
        assert_eq!(to_byte(-3.0), 0);
        assert_eq!(to_byte(7.0), 255);
        assert_eq!(to_byte(f64::NAN), 0);
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 1e-12);
        assert_eq!(color_to_rgb(Color::new(0.25, 0.0, 1.0), true), [127, 0, 255]);
    }

    #[test]
    fn test_ascii_two_pixels() {
        let img = Image::from_pixels(
            2,
            1,
            vec![Color::new(1.0, 0.0, 0.0), Color::new(0.0, 1.0, 0.0)],
        )
        .expect("pixel count matches");
        let text = String::from_utf8(img.to_ppm_bytes(PpmFormat::Ascii, false)).expect("ascii");
        assert_eq!(text, "P3\n2 1\n255\n255 0 0\n0 255 0\n");
    }

    #[test]
    fn test_binary_two_pixels() {
        let img = Image::from_pixels(
            2,
            1,
            vec![Color::new(1.0, 0.0, 0.0), Color::new(0.0, 1.0, 0.0)],
        )
        .expect("pixel count matches");
        let bytes = img.to_ppm_bytes(PpmFormat::Binary, false);
        let header = b"P6\n2 1\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn test_get_indexes_rows_from_top() {
        let pixels = (0..6).map(|k| Color::new(k as f64, 0.0, 0.0)).collect();
        let img = Image::from_pixels(3, 2, pixels).expect("pixel count matches");
        assert_eq!(img.get(0, 0).x, 0.0);
        assert_eq!(img.get(2, 0).x, 2.0);
        assert_eq!(img.get(0, 1).x, 3.0);
        assert_eq!(img.get(2, 1).x, 5.0);
    }

    #[test]
    fn test_from_pixels_checks_length() {
        let err = Image::from_pixels(2, 2, vec![Color::ZERO; 3]).unwrap_err();
        assert!(matches!(
            err,
            RenderError::PixelCountMismatch { expected: 4, actual: 3 }
        ));
    }
}

//! The frame the drawing is painted over.
//!
//! Stands in for the captured camera image: a hue sweep left to right, full
//! brightness at the top fading toward the bottom, and a grey ramp along the
//! bottom edge.  Color sampling reads this frame, never the composed canvas,
//! so strokes can't be picked back up as colors.

use stroke_log::{PixelSource, Rgb};

// ════════════════════════════════════════════════════════════════════════════
// Palette
// ════════════════════════════════════════════════════════════════════════════

/// Fraction of the height given to the grey ramp at the bottom.
const GREY_BAND: f32 = 0.12;

/// Convert HSV → packed ARGB (0xAARRGGBB, A=0xFF).
pub fn hsv_to_argb(h: f32, s: f32, v: f32) -> u32 {
    let h  = h.rem_euclid(360.0);
    let hi = (h / 60.0) as u32;
    let f  = h / 60.0 - hi as f32;
    let p  = v * (1.0 - s);
    let q  = v * (1.0 - s * f);
    let t  = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match hi {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    let ri = (r * 255.0) as u32;
    let gi = (g * 255.0) as u32;
    let bi = (b * 255.0) as u32;
    0xFF000000 | (ri << 16) | (gi << 8) | bi
}

// ════════════════════════════════════════════════════════════════════════════
// Backdrop
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct Backdrop {
    width:  usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Backdrop {
    /// The standard palette backdrop.
    pub fn palette(width: usize, height: usize) -> Self {
        let band_top = ((height as f32) * (1.0 - GREY_BAND)) as usize;
        let mut pixels = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let fx = x as f32 / width.max(1) as f32;
                let color = if y >= band_top {
                    let g = (fx * 255.0) as u32;
                    0xFF000000 | (g << 16) | (g << 8) | g
                } else {
                    let fy = y as f32 / band_top.max(1) as f32;
                    hsv_to_argb(fx * 360.0, 0.9, 1.0 - 0.75 * fy)
                };
                pixels.push(color);
            }
        }

        Backdrop { width, height, pixels }
    }

    /// A single flat color; handy for tests.
    pub fn solid(width: usize, height: usize, color: Rgb) -> Self {
        Backdrop { width, height, pixels: vec![color.to_argb(); width * height] }
    }

    pub fn pixels(&self) -> &[u32] { &self.pixels }
}

impl PixelSource for Backdrop {
    fn width(&self)  -> usize { self.width }
    fn height(&self) -> usize { self.height }
    fn pixel(&self, x: usize, y: usize) -> Rgb {
        Rgb::from_argb(self.pixels[y * self.width + x])
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

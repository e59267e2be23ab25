//! Three-octave sinusoidal elevation field.
//!
//!   h = 0.5 + 0.15·sin(3x + 2·cos 3y) + 0.08·sin(8x + 5·cos 8y) + 0.04·cos(15x + 7·sin 15y)
//!       + 0.05·(0.5 − y)
//!
//! with `x, y` the offset coordinates normalised to `[-0.5, 0.5)`. Each octave's
//! phase is driven by the other axis so ridges do not line up with the grid.
//! The raw sum is remapped from its fitted range `[0.1, 1.0]` onto `[0, 1]`.

use rand::Rng;

use super::OFFSET_SPAN;
use crate::request::ElevationRange;

/// (amplitude, frequency, cross-term weight) per octave.
const OCTAVES: [(f64, f64, f64); 3] = [
    (0.15, 3.0, 2.0),
    (0.08, 8.0, 5.0),
    (0.04, 15.0, 7.0),
];

/// Weight of the north–south tilt.
const GRADIENT: f64 = 0.05;

/// Empirical range of the raw sum.
const RAW_MIN: f64 = 0.1;
const RAW_SPAN: f64 = 0.9;

#[derive(Debug, Clone)]
pub struct HeightNoise {
    width: f64,
    height: f64,
    offset_x: f64,
    offset_y: f64,
    range: ElevationRange,
}

impl HeightNoise {
    /// Draw a fresh origin offset for a `width × height` grid.
    pub fn new<R: Rng>(rng: &mut R, width: usize, height: usize, range: ElevationRange) -> Self {
        let offset_x = rng.gen_range(0.0..OFFSET_SPAN);
        let offset_y = rng.gen_range(0.0..OFFSET_SPAN);
        Self::with_offset(width, height, range, offset_x, offset_y)
    }

    pub fn with_offset(
        width: usize,
        height: usize,
        range: ElevationRange,
        offset_x: f64,
        offset_y: f64,
    ) -> Self {
        Self {
            width: width.max(1) as f64,
            height: height.max(1) as f64,
            offset_x,
            offset_y,
            range,
        }
    }

    /// Normalised height in `[0, 1]`.
    pub fn unit(&self, x: f64, y: f64) -> f64 {
        let nx = (x + self.offset_x) / self.width - 0.5;
        let ny = (y + self.offset_y) / self.height - 0.5;

        let [(a0, f0, c0), (a1, f1, c1), (a2, f2, c2)] = OCTAVES;
        let mut h = 0.5
            + a0 * (f0 * nx + c0 * (f0 * ny).cos()).sin()
            + a1 * (f1 * nx + c1 * (f1 * ny).cos()).sin()
            + a2 * (f2 * nx + c2 * (f2 * ny).sin()).cos();
        h += GRADIENT * (0.5 - ny);

        ((h - RAW_MIN) / RAW_SPAN).clamp(0.0, 1.0)
    }

    /// Elevation in metres, always inside the configured range.
    pub fn sample(&self, x: f64, y: f64) -> f32 {
        let ElevationRange { min, max } = self.range;
        let v = min as f64 + self.unit(x, y) * (max - min) as f64;
        (v as f32).clamp(min, max)
    }
}

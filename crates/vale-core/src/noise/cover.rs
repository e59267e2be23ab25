//! Low-frequency wave sum that splits unclaimed land into forest and meadow.

use rand::Rng;

use super::OFFSET_SPAN;

/// Base threshold below which the wave sum is forest.
const FOREST_THRESHOLD: f64 = -0.45;

/// Amplitude of the high-frequency term that roughens the threshold.
const EDGE_AMPLITUDE: f64 = 0.18;

/// Per-call phase offsets.
///
/// `phase_x`/`phase_y` are shared with the path rasteriser, whose wobble uses
/// the same offsets as the vegetation waves.
#[derive(Debug, Clone, Copy)]
pub struct CoverNoise {
    pub phase_x: f64,
    pub phase_y: f64,
    phase_z: f64,
}

impl CoverNoise {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            phase_x: rng.gen_range(0.0..OFFSET_SPAN),
            phase_y: rng.gen_range(0.0..OFFSET_SPAN),
            phase_z: rng.gen_range(0.0..OFFSET_SPAN),
        }
    }

    pub fn with_phases(phase_x: f64, phase_y: f64, phase_z: f64) -> Self {
        Self { phase_x, phase_y, phase_z }
    }

    /// Raw wave sum in `[-3, 3]`.
    pub fn value(&self, x: f64, y: f64) -> f64 {
        let n1 = (x * 0.012 + y * 0.014 + self.phase_x).sin();
        let n2 = (x * 0.009 - y * 0.011 + self.phase_y).cos();
        let n3 = (x * 0.021 + y * 0.017 + self.phase_z).sin();
        n1 + n2 + n3
    }

    /// Locally perturbed forest threshold.
    pub fn threshold(&self, x: f64, y: f64) -> f64 {
        FOREST_THRESHOLD + (x * 0.07 + y * 0.11 + self.phase_y).sin() * EDGE_AMPLITUDE
    }

    pub fn is_forest(&self, x: f64, y: f64) -> bool {
        self.value(x, y) < self.threshold(x, y)
    }
}

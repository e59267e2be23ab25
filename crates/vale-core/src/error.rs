//! Error type shared by every fallible entry point of the core.

use thiserror::Error;

/// Hard failures surfaced to the caller.
///
/// Shortfalls in stochastic placement are not errors; they only show up as
/// fewer fields, path points or animals than requested.
#[derive(Debug, Error)]
pub enum ValeError {
    #[error("grid dimensions must be at least 1×1, got {width}×{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("elevation range [{min}, {max}] is empty or not finite")]
    InvalidElevationRange { min: f32, max: f32 },

    #[error("contour interval {0} is below the minimum of {min}", min = crate::contours::MIN_CONTOUR_INTERVAL)]
    InvalidInterval(f64),

    #[error("malformed grid snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("grid snapshot row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, found: usize, expected: usize },

    #[error("grid snapshot contains no cells")]
    EmptySnapshot,
}

pub type Result<T> = std::result::Result<T, ValeError>;

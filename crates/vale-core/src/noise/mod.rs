//! Closed-form synthetic noise used by the generator.
//!
//! Both fields are sums of a few sine/cosine waves with per-call random phase
//! offsets, so they are cheap to evaluate at any coordinate and need no tables.

pub mod cover;
pub mod height;

pub use cover::CoverNoise;
pub use height::HeightNoise;

/// Upper bound (exclusive) of the random phase offsets drawn per call.
pub(crate) const OFFSET_SPAN: f64 = 1000.0;

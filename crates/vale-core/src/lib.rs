//! Synthetic village-and-countryside terrain.
//!
//! [`generate`] builds a [`Grid`] of elevation and land cover from a
//! [`GenerationRequest`]. The other entry points work on a finished grid and
//! never modify it: [`extract_contours`], [`place_fauna`], [`landmarks`], and
//! [`serialize`] / [`deserialize`] for export and import.

pub mod cell;
pub mod contours;
pub mod error;
pub mod fauna;
pub mod generator;
pub mod grid;
pub mod landmarks;
pub mod mask;
pub mod noise;
pub mod paths;
pub mod request;
pub mod snapshot;
pub mod window;

pub use cell::{Cell, LandCover};
pub use contours::{extract_contours, ContourSegment, MIN_CONTOUR_INTERVAL};
pub use error::{Result, ValeError};
pub use fauna::{place_fauna, Fauna, FaunaKind, FaunaRequest};
pub use generator::{assemble_grid, TerrainGenerator};
pub use grid::{Grid, GridStats};
pub use landmarks::{landmarks, Landmark, Landmarks};
pub use request::{ElevationRange, GenerationRequest, Preset};
pub use snapshot::{deserialize, serialize};
pub use window::Window;

/// Generate a grid with the default pipeline.
pub fn generate(request: &GenerationRequest) -> Result<Grid> {
    TerrainGenerator::new().generate(request)
}

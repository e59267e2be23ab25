//! Pipeline orchestrator: noise → mask → cells → extrema.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::cell::{Cell, LandCover};
use crate::error::{Result, ValeError};
use crate::grid::{neighbors8, Grid};
use crate::mask::build_mask;
use crate::noise::{CoverNoise, HeightNoise};
use crate::request::GenerationRequest;

/// The main pipeline orchestrator.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerrainGenerator;

impl TerrainGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full generation pipeline.
    ///
    /// Pipeline order:
    ///   1. Elevation noise origin and vegetation phases are drawn
    ///   2. Biome mask: border, settlement, fields, paths, vegetation
    ///   3. Cells assembled from elevation and mask labels
    ///   4. Peak / valley flags
    ///
    /// All randomness comes from one `StdRng`; the same seed reproduces the
    /// same grid. Without a seed a fresh one is drawn and logged.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Grid> {
        let range = request.validate()?;
        let (width, height) = (request.width, request.height);
        let seed = request.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        debug!("generate: {width}×{height}, elevation {:.1}–{:.1} m, seed {seed}", range.min, range.max);

        // ── 1. Noise fields ─────────────────────────────────────────────────
        let relief = HeightNoise::new(&mut rng, width, height, range);
        let cover = CoverNoise::new(&mut rng);

        // ── 2. Biome mask ───────────────────────────────────────────────────
        let layout = build_mask(&mut rng, width, height, &cover);

        // ── 3 + 4. Cells and extrema ────────────────────────────────────────
        let mask = &layout.mask;
        let grid = assemble_grid(
            width,
            height,
            |x, y| relief.sample(x as f64, y as f64),
            |x, y| mask.get(x, y).land_cover(),
        )?;

        info!(
            "generated {width}×{height} grid (seed {seed}): {} fields, {} path points, {} path edges",
            layout.fields.len(),
            layout.paths.points.len(),
            layout.paths.edges.len(),
        );
        Ok(grid)
    }
}

/// Build a grid from per-cell elevation and land cover, then derive
/// passability and peak/valley flags.
///
/// The grid is returned only once every cell is filled.
pub fn assemble_grid<E, L>(width: usize, height: usize, elevation: E, land_cover: L) -> Result<Grid>
where
    E: Fn(usize, usize) -> f32 + Sync,
    L: Fn(usize, usize) -> LandCover + Sync,
{
    if width == 0 || height == 0 {
        return Err(ValeError::InvalidDimensions { width, height });
    }

    let mut cells = vec![Cell::new(LandCover::Meadow, 0.0); width * height];
    let fill_row = |(y, row): (usize, &mut [Cell])| {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = Cell::new(land_cover(x, y), elevation(x, y));
        }
    };
    #[cfg(feature = "threading")]
    cells.par_chunks_mut(width).enumerate().for_each(fill_row);
    #[cfg(not(feature = "threading"))]
    cells.chunks_mut(width).enumerate().for_each(fill_row);

    mark_extrema(&mut cells, width, height);
    Ok(Grid::from_cells(width, height, cells))
}

/// Set `is_peak` / `is_valley` by strict comparison with all in-bounds
/// 8-neighbours. A cell without neighbours is neither.
fn mark_extrema(cells: &mut [Cell], width: usize, height: usize) {
    let elevation: Vec<f32> = cells.iter().map(|c| c.elevation).collect();
    let classify = |(i, cell): (usize, &mut Cell)| {
        let (x, y) = (i % width, i / width);
        let h = elevation[i];
        let mut any = false;
        let mut peak = true;
        let mut valley = true;
        for (nx, ny) in neighbors8(x, y, width, height) {
            let n = elevation[ny * width + nx];
            any = true;
            peak &= n < h;
            valley &= n > h;
        }
        cell.is_peak = any && peak;
        cell.is_valley = any && valley;
    };
    #[cfg(feature = "threading")]
    cells.par_iter_mut().enumerate().for_each(classify);
    #[cfg(not(feature = "threading"))]
    cells.iter_mut().enumerate().for_each(classify);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Preset;

    #[test]
    fn same_seed_same_grid() {
        let req = GenerationRequest::new(160, 120).with_preset(Preset::Hills).with_seed(99);
        let a = TerrainGenerator::new().generate(&req).unwrap();
        let b = TerrainGenerator::new().generate(&req).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = TerrainGenerator::new().generate(&GenerationRequest::new(80, 80).with_seed(1)).unwrap();
        let b = TerrainGenerator::new().generate(&GenerationRequest::new(80, 80).with_seed(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn single_peak_in_a_bowl() {
        let grid = assemble_grid(
            5,
            5,
            |x, y| if (x, y) == (2, 2) { 10.0 } else { 1.0 },
            |_, _| LandCover::Meadow,
        )
        .unwrap();
        assert!(grid.get(2, 2).is_peak);
        assert!(!grid.get(2, 2).is_valley);
        assert_eq!(grid.cells().iter().filter(|c| c.is_peak).count(), 1);
        // Equal neighbours block the valley flag everywhere else.
        assert_eq!(grid.cells().iter().filter(|c| c.is_valley).count(), 0);
    }

    #[test]
    fn border_cell_can_be_valley() {
        let grid = assemble_grid(4, 4, |x, y| (x + y) as f32, |_, _| LandCover::Field).unwrap();
        assert!(grid.get(0, 0).is_valley);
        assert!(grid.get(3, 3).is_peak);
        assert!(!grid.get(1, 1).is_valley);
    }

    #[test]
    fn lone_cell_is_neither_peak_nor_valley() {
        let grid = assemble_grid(1, 1, |_, _| 5.0, |_, _| LandCover::Meadow).unwrap();
        assert!(!grid.get(0, 0).is_peak);
        assert!(!grid.get(0, 0).is_valley);
    }

    #[test]
    fn passability_follows_land_cover() {
        let grid = assemble_grid(
            3,
            1,
            |_, _| 0.0,
            |x, _| [LandCover::Water, LandCover::Road, LandCover::Settlement][x],
        )
        .unwrap();
        assert!(!grid.get(0, 0).passable);
        assert!(grid.get(1, 0).passable);
        assert!(!grid.get(2, 0).passable);
    }

    #[test]
    fn zero_sized_assembly_rejected() {
        assert!(assemble_grid(0, 3, |_, _| 0.0, |_, _| LandCover::Meadow).is_err());
    }
}

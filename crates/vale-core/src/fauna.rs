//! Rejection-sampled animal placement on a finished grid.
//!
//! Foxes live on meadow and along forest edges; hares want open, passable
//! meadow or field well away from the settlement and the dense forest. Each
//! species gets `count × 30` attempts; missing the target is not an error.
//! Counts above the number of grid cells are capped to it.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cell::LandCover;
use crate::grid::{neighbors8, Grid};

/// Attempts per requested animal.
pub const ATTEMPTS_PER_ANIMAL: usize = 30;

/// Chebyshev radius a hare keeps from settlement and dense forest.
pub const HARE_CLEARANCE: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaunaKind {
    Fox,
    Hare,
}

/// One placed animal, at cell `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fauna {
    #[serde(rename = "type")]
    pub kind: FaunaKind,
    pub x: usize,
    pub y: usize,
}

/// Upper bounds on how many animals of each kind to place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaunaRequest {
    pub fox: usize,
    pub hare: usize,
    pub seed: Option<u64>,
}

impl Default for FaunaRequest {
    fn default() -> Self {
        Self { fox: 8, hare: 18, seed: None }
    }
}

/// Place foxes then hares. Several animals may share a cell.
pub fn place_fauna(grid: &Grid, request: &FaunaRequest) -> Vec<Fauna> {
    let seed = request.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut out = Vec::new();
    sample(&mut rng, grid, FaunaKind::Fox, request.fox, fox_accepts, &mut out);
    sample(&mut rng, grid, FaunaKind::Hare, request.hare, hare_accepts, &mut out);
    out
}

fn sample<R: Rng>(
    rng: &mut R,
    grid: &Grid,
    kind: FaunaKind,
    count: usize,
    accepts: fn(&Grid, usize, usize) -> bool,
    out: &mut Vec<Fauna>,
) {
    let count = count.min(grid.cells().len());
    let budget = count.saturating_mul(ATTEMPTS_PER_ANIMAL);
    let mut placed = 0;
    let mut tries = 0;
    while placed < count && tries < budget {
        tries += 1;
        let x = rng.gen_range(0..grid.width());
        let y = rng.gen_range(0..grid.height());
        if accepts(grid, x, y) {
            out.push(Fauna { kind, x, y });
            placed += 1;
        }
    }
    debug!("fauna: placed {placed}/{count} {kind:?} in {tries} attempts");
}

/// Meadow always; forest only where a neighbour has a different land cover.
fn fox_accepts(grid: &Grid, x: usize, y: usize) -> bool {
    match grid.get(x, y).land_cover {
        LandCover::Meadow => true,
        LandCover::Forest => on_boundary(grid, x, y),
        _ => false,
    }
}

/// Passable field or meadow with no settlement or dense forest within
/// Chebyshev distance [`HARE_CLEARANCE`].
fn hare_accepts(grid: &Grid, x: usize, y: usize) -> bool {
    let cell = grid.get(x, y);
    if !matches!(cell.land_cover, LandCover::Field | LandCover::Meadow) || !cell.passable {
        return false;
    }
    for dy in -HARE_CLEARANCE..=HARE_CLEARANCE {
        for dx in -HARE_CLEARANCE..=HARE_CLEARANCE {
            let (nx, ny) = (x as i64 + dx, y as i64 + dy);
            if !grid.contains(nx, ny) {
                continue;
            }
            if matches!(
                grid.get(nx as usize, ny as usize).land_cover,
                LandCover::Settlement | LandCover::DenseForest
            ) {
                return false;
            }
        }
    }
    true
}

fn on_boundary(grid: &Grid, x: usize, y: usize) -> bool {
    let here = grid.get(x, y).land_cover;
    neighbors8(x, y, grid.width(), grid.height()).any(|(nx, ny)| grid.get(nx, ny).land_cover != here)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::assemble_grid;

    fn striped() -> Grid {
        // Columns: 0-9 forest, 10-19 meadow, 20-29 field, 30-39 dense forest.
        assemble_grid(40, 20, |_, _| 0.0, |x, _| match x {
            0..=9 => LandCover::Forest,
            10..=19 => LandCover::Meadow,
            20..=29 => LandCover::Field,
            _ => LandCover::DenseForest,
        })
        .unwrap()
    }

    #[test]
    fn foxes_on_meadow_or_forest_edge() {
        let g = striped();
        let animals = place_fauna(&g, &FaunaRequest { fox: 40, hare: 0, seed: Some(3) });
        assert_eq!(animals.len(), 40);
        for a in &animals {
            assert_eq!(a.kind, FaunaKind::Fox);
            match g.get(a.x, a.y).land_cover {
                LandCover::Meadow => {}
                LandCover::Forest => assert_eq!(a.x, 9, "interior forest fox at ({}, {})", a.x, a.y),
                other => panic!("fox on {other:?}"),
            }
        }
    }

    #[test]
    fn hares_keep_clear_of_dense_forest() {
        let g = striped();
        let animals = place_fauna(&g, &FaunaRequest { fox: 0, hare: 30, seed: Some(5) });
        assert!(!animals.is_empty());
        for a in &animals {
            assert_eq!(a.kind, FaunaKind::Hare);
            assert!((10..=26).contains(&a.x), "hare at x={}", a.x);
        }
    }

    #[test]
    fn hostile_grid_yields_shortfall_not_error() {
        let g = assemble_grid(10, 10, |_, _| 0.0, |_, _| LandCover::Water).unwrap();
        let animals = place_fauna(&g, &FaunaRequest { fox: 8, hare: 18, seed: Some(1) });
        assert!(animals.is_empty());
    }

    #[test]
    fn foxes_come_before_hares() {
        let g = striped();
        let animals = place_fauna(&g, &FaunaRequest { fox: 5, hare: 5, seed: Some(8) });
        let first_hare = animals.iter().position(|a| a.kind == FaunaKind::Hare).unwrap_or(animals.len());
        assert!(animals[..first_hare].iter().all(|a| a.kind == FaunaKind::Fox));
        assert!(animals[first_hare..].iter().all(|a| a.kind == FaunaKind::Hare));
    }

    #[test]
    fn oversized_count_is_capped_to_grid() {
        let g = assemble_grid(20, 20, |_, _| 0.0, |_, _| LandCover::Meadow).unwrap();
        let animals = place_fauna(&g, &FaunaRequest { fox: usize::MAX / 16, hare: usize::MAX, seed: Some(1) });
        let foxes = animals.iter().filter(|a| a.kind == FaunaKind::Fox).count();
        let hares = animals.len() - foxes;
        assert!(foxes > 0 && foxes <= 400, "foxes {foxes}");
        assert!(hares <= 400, "hares {hares}");
    }

    #[test]
    fn serialized_with_type_tag() {
        let json = serde_json::to_value(Fauna { kind: FaunaKind::Hare, x: 3, y: 4 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "hare", "x": 3, "y": 4}));
    }
}

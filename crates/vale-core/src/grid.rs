use serde::Serialize;

use crate::cell::{Cell, LandCover};

/// Side length of one cell in metres.
pub const CELL_SIZE_M: f64 = 1.0;

/// The assembled terrain: `width × height` cells, row-major, origin top-left.
///
/// A `Grid` is never mutated after assembly; regeneration or import produces a
/// new value that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Wrap a row-major cell vector. `cells.len()` must equal `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * self.width + x]
    }

    #[inline]
    pub fn elevation(&self, x: usize, y: usize) -> f32 {
        self.get(x, y).elevation
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Cell> {
        self.cells.chunks_exact(self.width)
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Map extent in metres as `(east-west, north-south)`.
    pub fn extent_m(&self) -> (f64, f64) {
        (self.width as f64 * CELL_SIZE_M, self.height as f64 * CELL_SIZE_M)
    }

    /// Map extent in kilometres.
    pub fn extent_km(&self) -> (f64, f64) {
        let (w, h) = self.extent_m();
        (w / 1000.0, h / 1000.0)
    }

    pub fn min_elevation(&self) -> f32 {
        self.cells.iter().map(|c| c.elevation).fold(f32::INFINITY, f32::min)
    }

    pub fn max_elevation(&self) -> f32 {
        self.cells.iter().map(|c| c.elevation).fold(f32::NEG_INFINITY, f32::max)
    }

    /// Summary counts for reporting.
    pub fn stats(&self) -> GridStats {
        let mut land_cover: Vec<(LandCover, usize)> =
            LandCover::ALL.iter().map(|&lc| (lc, 0)).collect();
        let mut peaks = 0;
        let mut valleys = 0;
        let mut impassable = 0;
        for cell in &self.cells {
            if let Some(entry) = land_cover.iter_mut().find(|(lc, _)| *lc == cell.land_cover) {
                entry.1 += 1;
            }
            peaks += cell.is_peak as usize;
            valleys += cell.is_valley as usize;
            impassable += !cell.passable as usize;
        }
        land_cover.retain(|&(_, n)| n > 0);
        GridStats {
            width: self.width,
            height: self.height,
            min_elevation: self.min_elevation(),
            max_elevation: self.max_elevation(),
            land_cover,
            peaks,
            valleys,
            impassable,
        }
    }
}

/// Cell counts and elevation bounds of a grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStats {
    pub width: usize,
    pub height: usize,
    pub min_elevation: f32,
    pub max_elevation: f32,
    /// Only land covers that occur at least once.
    pub land_cover: Vec<(LandCover, usize)>,
    pub peaks: usize,
    pub valleys: usize,
    pub impassable: usize,
}

/// In-bounds 8-neighbourhood of `(x, y)` on a `width × height` grid.
pub(crate) fn neighbors8(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    const OFFSETS: [(i64, i64); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1,  0),          (1,  0),
        (-1,  1), (0,  1), (1,  1),
    ];
    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
            None
        } else {
            Some((nx as usize, ny as usize))
        }
    })
}

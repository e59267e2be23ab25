//! Rectangular cell ranges used to restrict contour and landmark queries.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 32.0;

/// Cell range `[min_x, max_x) × [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub min_x: usize,
    pub min_y: usize,
    pub max_x: usize,
    pub max_y: usize,
}

impl Window {
    pub fn new(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// The whole grid.
    pub fn full(grid: &Grid) -> Self {
        Self::new(0, 0, grid.width(), grid.height())
    }

    /// Clip to a `width × height` grid. Inverted ranges collapse to empty.
    pub fn clamped(&self, width: usize, height: usize) -> Self {
        let max_x = self.max_x.min(width);
        let max_y = self.max_y.min(height);
        Self {
            min_x: self.min_x.min(max_x),
            min_y: self.min_y.min(max_y),
            max_x,
            max_y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// The view a pan/zoom state shows: the grid scaled down by `zoom`,
    /// centred on `(center_x, center_y)` and shifted back inside the grid.
    pub fn around(center_x: f64, center_y: f64, zoom: f64, grid: &Grid) -> Self {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let (gw, gh) = (grid.width() as f64, grid.height() as f64);
        let (min_x, max_x) = shift_inside(center_x, gw / zoom, gw);
        let (min_y, max_y) = shift_inside(center_y, gh / zoom, gh);
        Self::new(
            min_x.floor().max(0.0) as usize,
            min_y.floor().max(0.0) as usize,
            (max_x.ceil() as usize).min(grid.width()),
            (max_y.ceil() as usize).min(grid.height()),
        )
    }
}

/// Interval of length `len` centred on `center`, moved to fit `[0, extent]`.
fn shift_inside(center: f64, len: f64, extent: f64) -> (f64, f64) {
    let mut lo = center - len / 2.0;
    let mut hi = center + len / 2.0;
    if lo < 0.0 {
        hi -= lo;
        lo = 0.0;
    }
    if hi > extent {
        lo -= hi - extent;
        hi = extent;
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::LandCover;
    use crate::generator::assemble_grid;

    fn grid(w: usize, h: usize) -> Grid {
        assemble_grid(w, h, |_, _| 0.0, |_, _| LandCover::Meadow).unwrap()
    }

    #[test]
    fn clamp_to_grid() {
        let w = Window::new(5, 5, 500, 40).clamped(100, 30);
        assert_eq!(w, Window::new(5, 5, 100, 30));
        let empty = Window::new(200, 0, 300, 10).clamped(100, 30);
        assert!(empty.is_empty());
    }

    #[test]
    fn zoom_one_shows_everything() {
        let g = grid(100, 80);
        assert_eq!(Window::around(50.0, 40.0, 1.0, &g), Window::full(&g));
        // Off-centre at zoom 1 still shows the whole map.
        assert_eq!(Window::around(10.0, 70.0, 1.0, &g), Window::full(&g));
    }

    #[test]
    fn zoomed_view_is_shifted_inside() {
        let g = grid(100, 100);
        let w = Window::around(5.0, 95.0, 4.0, &g);
        assert_eq!(w, Window::new(0, 75, 25, 100));
    }

    #[test]
    fn zoom_is_clamped() {
        let g = grid(64, 64);
        let w = Window::around(32.0, 32.0, 1000.0, &g);
        assert_eq!(w, Window::new(31, 31, 33, 33));
    }
}

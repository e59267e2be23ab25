//! Isoline extraction by marching squares.
//!
//! For each iso-level between the window's minimum and maximum elevation,
//! every unit cell (four neighbouring samples) is checked for edges whose
//! endpoints lie strictly on opposite sides of the level. Cells with exactly
//! two such edges yield one segment between the linearly interpolated
//! crossing points. Cells with four crossings (saddles) are skipped, as are
//! crossings through a sample that equals the level exactly.
//!
//! Segments are returned unordered; they are not chained into polylines.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValeError};
use crate::grid::Grid;
use crate::window::Window;

/// Smallest accepted contour spacing in elevation units.
pub const MIN_CONTOUR_INTERVAL: f64 = 0.01;

/// One isoline piece in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub isovalue: f64,
}

/// Extract contour segments every `interval` elevation units inside `window`.
///
/// The window is clipped to the grid. A window with no samples, or a flat one,
/// falls back to the level range `[0, 1]`.
pub fn extract_contours(grid: &Grid, window: Window, interval: f64) -> Result<Vec<ContourSegment>> {
    if !interval.is_finite() || interval < MIN_CONTOUR_INTERVAL {
        return Err(ValeError::InvalidInterval(interval));
    }
    let window = window.clamped(grid.width(), grid.height());
    let (min_h, max_h) = sample_range(grid, &window);

    let mut segments = Vec::new();
    let first = (min_h / interval).ceil();
    for k in 0u64.. {
        let iso = (first + k as f64) * interval;
        if iso >= max_h {
            break;
        }
        march_level(grid, &window, iso, &mut segments);
    }
    Ok(segments)
}

/// Min/max over every sample the window's unit cells touch.
fn sample_range(grid: &Grid, window: &Window) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    if !window.is_empty() {
        let x_end = window.max_x.min(grid.width() - 1);
        let y_end = window.max_y.min(grid.height() - 1);
        for y in window.min_y..=y_end {
            for x in window.min_x..=x_end {
                let h = grid.elevation(x, y) as f64;
                lo = lo.min(h);
                hi = hi.max(h);
            }
        }
    }
    if lo.is_finite() && hi > lo {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

/// Strict sign change between two samples.
#[inline]
fn crosses(a: f64, b: f64, iso: f64) -> bool {
    (a < iso && b > iso) || (a > iso && b < iso)
}

fn march_level(grid: &Grid, window: &Window, iso: f64, out: &mut Vec<ContourSegment>) {
    // Unit cell (x, y) spans samples x..=x+1, y..=y+1.
    let x_end = window.max_x.min(grid.width().saturating_sub(1));
    let y_end = window.max_y.min(grid.height().saturating_sub(1));
    for y in window.min_y..y_end {
        for x in window.min_x..x_end {
            let h00 = grid.elevation(x, y) as f64;
            let h10 = grid.elevation(x + 1, y) as f64;
            let h01 = grid.elevation(x, y + 1) as f64;
            let h11 = grid.elevation(x + 1, y + 1) as f64;
            let (fx, fy) = (x as f64, y as f64);

            let mut hits: [(f64, f64); 4] = [(0.0, 0.0); 4];
            let mut n = 0;
            let mut push = |p: (f64, f64)| {
                if n < 4 {
                    hits[n] = p;
                }
                n += 1;
            };
            // left
            if crosses(h00, h01, iso) {
                push((fx, fy + (iso - h00) / (h01 - h00)));
            }
            // right
            if crosses(h10, h11, iso) {
                push((fx + 1.0, fy + (iso - h10) / (h11 - h10)));
            }
            // top
            if crosses(h00, h10, iso) {
                push((fx + (iso - h00) / (h10 - h00), fy));
            }
            // bottom
            if crosses(h01, h11, iso) {
                push((fx + (iso - h01) / (h11 - h01), fy + 1.0));
            }

            if n == 2 {
                let [(x1, y1), (x2, y2), ..] = hits;
                out.push(ContourSegment { x1, y1, x2, y2, isovalue: iso });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::LandCover;
    use crate::generator::assemble_grid;
    use approx::assert_abs_diff_eq;

    fn tilted(w: usize, h: usize, slope: f32) -> Grid {
        assemble_grid(w, h, |x, _| 100.0 + slope * x as f32, |_, _| LandCover::Meadow).unwrap()
    }

    #[test]
    fn rejects_tiny_and_non_finite_intervals() {
        let g = tilted(4, 4, 1.0);
        assert!(matches!(extract_contours(&g, Window::full(&g), 0.0), Err(ValeError::InvalidInterval(_))));
        assert!(extract_contours(&g, Window::full(&g), 0.001).is_err());
        assert!(extract_contours(&g, Window::full(&g), f64::NAN).is_err());
        assert!(extract_contours(&g, Window::full(&g), MIN_CONTOUR_INTERVAL).is_ok());
    }

    #[test]
    fn tilted_plane_gives_vertical_lines() {
        // Elevation 100 + 2x; odd multiples of 5 lie half way between columns.
        let g = tilted(10, 6, 2.0);
        let segs = extract_contours(&g, Window::full(&g), 5.0).unwrap();
        assert!(!segs.is_empty());
        for s in &segs {
            assert_abs_diff_eq!(s.x1, s.x2, epsilon = 1e-9);
            assert_abs_diff_eq!(100.0 + 2.0 * s.x1, s.isovalue, epsilon = 1e-9);
            assert_abs_diff_eq!((s.y1 - s.y2).abs(), 1.0, epsilon = 1e-9);
        }
        // 105 and 115 cross 5 rows of unit cells each; 100 and 110 sit on samples.
        assert_eq!(segs.len(), 2 * 5);
    }

    #[test]
    fn flat_window_yields_nothing() {
        let g = tilted(8, 8, 0.0);
        assert!(extract_contours(&g, Window::full(&g), 1.0).unwrap().is_empty());
    }

    #[test]
    fn empty_window_yields_nothing() {
        let g = tilted(8, 8, 3.0);
        let w = Window::new(5, 5, 5, 8);
        assert!(extract_contours(&g, w, 1.0).unwrap().is_empty());
    }

    #[test]
    fn saddle_is_skipped() {
        let g = assemble_grid(
            2,
            2,
            |x, y| if x == y { 10.0 } else { 0.0 },
            |_, _| LandCover::Meadow,
        )
        .unwrap();
        let segs = extract_contours(&g, Window::full(&g), 5.0).unwrap();
        assert!(segs.is_empty());
    }

    #[test]
    fn corner_cut_single_segment() {
        let g = assemble_grid(
            2,
            2,
            |x, y| if (x, y) == (1, 1) { 10.0 } else { 0.0 },
            |_, _| LandCover::Meadow,
        )
        .unwrap();
        let segs = extract_contours(&g, Window::full(&g), 4.0).unwrap();
        // Levels 4 and 8 each cut the (1,1) corner.
        assert_eq!(segs.len(), 2);
        let s = segs[0];
        assert_abs_diff_eq!(s.isovalue, 4.0);
        assert_abs_diff_eq!(s.x1, 1.0);
        assert_abs_diff_eq!(s.y1, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(s.x2, 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(s.y2, 1.0);
    }
}

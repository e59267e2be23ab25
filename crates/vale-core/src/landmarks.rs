//! Peak and valley markers for map labelling.
//!
//! Collects flagged extrema inside a window, orders them (peaks highest
//! first, valleys lowest first) and drops any marker within `min_spacing`
//! cells of one already kept, so dense clusters produce a single label.
//! Peaks in the bottom fifth and valleys in the top fifth of the grid's
//! elevation span are not labelled.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::window::Window;

/// Peaks must lie above this fraction of the grid's elevation span.
pub const PEAK_CUTOFF: f32 = 0.2;

/// Valleys must lie below this fraction of the grid's elevation span.
pub const VALLEY_CUTOFF: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: usize,
    pub y: usize,
    pub elevation: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmarks {
    pub peaks: Vec<Landmark>,
    pub valleys: Vec<Landmark>,
}

pub fn landmarks(grid: &Grid, window: Window, min_spacing: f64) -> Landmarks {
    let window = window.clamped(grid.width(), grid.height());
    let (lo, hi) = (grid.min_elevation(), grid.max_elevation());
    let peak_floor = lo + PEAK_CUTOFF * (hi - lo);
    let valley_ceiling = lo + VALLEY_CUTOFF * (hi - lo);
    let mut peaks = Vec::new();
    let mut valleys = Vec::new();
    for y in window.min_y..window.max_y {
        for x in window.min_x..window.max_x {
            let cell = grid.get(x, y);
            let mark = Landmark { x, y, elevation: cell.elevation };
            if cell.is_peak && cell.elevation > peak_floor {
                peaks.push(mark);
            } else if cell.is_valley && cell.elevation < valley_ceiling {
                valleys.push(mark);
            }
        }
    }
    peaks.sort_by(|a, b| b.elevation.total_cmp(&a.elevation));
    valleys.sort_by(|a, b| a.elevation.total_cmp(&b.elevation));
    Landmarks {
        peaks: thin(peaks, min_spacing),
        valleys: thin(valleys, min_spacing),
    }
}

fn thin(sorted: Vec<Landmark>, min_spacing: f64) -> Vec<Landmark> {
    let mut kept: Vec<Landmark> = Vec::new();
    for m in sorted {
        let crowded = kept.iter().any(|k| {
            let dx = k.x as f64 - m.x as f64;
            let dy = k.y as f64 - m.y as f64;
            dx.hypot(dy) < min_spacing
        });
        if !crowded {
            kept.push(m);
        }
    }
    kept
}

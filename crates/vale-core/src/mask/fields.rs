//! Farm fields: oriented rectangles placed by rejection sampling around the
//! settlement.
//!
//! A field is kept only if every cell it covers is still unset and its rotated
//! bounding box lies inside the grid. Accepted fields are painted with one
//! boundary edge as a ditch, the other three as road, and the interior as field.

use std::f64::consts::{FRAC_PI_4, TAU};

use rand::Rng;

use super::{Mask, MaskLabel};

/// Distance of a field centroid from the settlement centre.
pub const MIN_FIELD_RADIUS: f64 = 100.0;
pub const MAX_FIELD_RADIUS: f64 = 400.0;

/// Total placement attempts per generation, shared by all fields.
pub const MAX_ATTEMPTS: usize = 200;

/// Which local edge of a field is a ditch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitchEdge {
    Top,
    Right,
    Bottom,
    Left,
}

impl DitchEdge {
    const ALL: [DitchEdge; 4] = [DitchEdge::Top, DitchEdge::Right, DitchEdge::Bottom, DitchEdge::Left];
}

/// What a covered cell becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldPart {
    Ditch,
    Boundary,
    Interior,
}

/// An oriented rectangle, centred on `(center_x, center_y)`, rotated by `angle`
/// radians.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPlot {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
    pub ditch: DitchEdge,
}

impl FieldPlot {
    /// `(x, y)` in the field's local frame.
    fn to_local(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let (s, c) = self.angle.sin_cos();
        (c * dx + s * dy, -s * dx + c * dy)
    }

    fn contains_local(&self, lx: f64, ly: f64) -> bool {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        lx >= -hw && lx < hw && ly >= -hh && ly < hh
    }

    /// True if the cell at `(x, y)` lies inside the rectangle.
    pub fn covers(&self, x: usize, y: usize) -> bool {
        let (lx, ly) = self.to_local(x as f64, y as f64);
        self.contains_local(lx, ly)
    }

    /// Inclusive cell bounds of the rotated rectangle, `None` if any part of it
    /// falls outside a `width × height` grid.
    pub fn cell_bounds(&self, width: usize, height: usize) -> Option<(usize, usize, usize, usize)> {
        let (s, c) = self.angle.sin_cos();
        let half_x = c.abs() * self.width / 2.0 + s.abs() * self.height / 2.0;
        let half_y = s.abs() * self.width / 2.0 + c.abs() * self.height / 2.0;
        let x0 = (self.center_x - half_x).floor();
        let y0 = (self.center_y - half_y).floor();
        let x1 = (self.center_x + half_x).ceil();
        let y1 = (self.center_y + half_y).ceil();
        if x0 < 0.0 || y0 < 0.0 || x1 >= width as f64 || y1 >= height as f64 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }

    /// Every cell covered by the field. Empty if the field leaves the grid.
    pub fn cells(&self, width: usize, height: usize) -> Vec<(usize, usize)> {
        let Some((x0, y0, x1, y1)) = self.cell_bounds(width, height) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                if self.covers(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Cells within one unit of a local edge are boundary; the ditch edge wins.
    fn part_at(&self, lx: f64, ly: f64) -> FieldPart {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        let on_edge = |edge: DitchEdge| match edge {
            DitchEdge::Top    => (ly + hh).abs() < 1.0,
            DitchEdge::Right  => (lx - (hw - 1.0)).abs() < 1.0,
            DitchEdge::Bottom => (ly - (hh - 1.0)).abs() < 1.0,
            DitchEdge::Left   => (lx + hw).abs() < 1.0,
        };
        if on_edge(self.ditch) {
            FieldPart::Ditch
        } else if DitchEdge::ALL.into_iter().any(on_edge) {
            FieldPart::Boundary
        } else {
            FieldPart::Interior
        }
    }

    /// The centroid rounded to the nearest cell.
    pub fn centroid_cell(&self) -> (i64, i64) {
        (self.center_x.round() as i64, self.center_y.round() as i64)
    }
}

/// Place up to 12–17 fields and paint them into `mask`.
///
/// Running out of attempts is not an error; the map simply has fewer fields.
pub fn place_fields<R: Rng>(rng: &mut R, mask: &mut Mask) -> Vec<FieldPlot> {
    let target: usize = rng.gen_range(12..18);
    let (cx, cy) = mask.center();
    let mut fields = Vec::with_capacity(target);
    let mut attempts = 0;

    while fields.len() < target && attempts < MAX_ATTEMPTS {
        attempts += 1;

        let bearing = rng.gen_range(0.0..TAU);
        let r = rng.gen_range(MIN_FIELD_RADIUS..MAX_FIELD_RADIUS);
        let mut plot = FieldPlot {
            center_x: (cx as f64 + bearing.cos() * r).floor(),
            center_y: (cy as f64 + bearing.sin() * r).floor(),
            width: rng.gen_range(30.0..70.0),
            height: rng.gen_range(20.0..50.0),
            angle: rng.gen_range(-FRAC_PI_4..FRAC_PI_4),
            ditch: DitchEdge::Top,
        };

        let cells = plot.cells(mask.width, mask.height);
        if cells.is_empty() || cells.iter().any(|&(x, y)| !mask.is_unset(x, y)) {
            continue;
        }

        plot.ditch = DitchEdge::ALL[rng.gen_range(0..4)];
        paint_field(&plot, &cells, mask);
        fields.push(plot);
    }

    log::debug!("fields: placed {}/{target} in {attempts} attempts", fields.len());
    fields
}

fn paint_field(plot: &FieldPlot, cells: &[(usize, usize)], mask: &mut Mask) {
    for &(x, y) in cells {
        let (lx, ly) = plot.to_local(x as f64, y as f64);
        let label = match plot.part_at(lx, ly) {
            FieldPart::Ditch    => MaskLabel::Ditch,
            FieldPart::Boundary => MaskLabel::Road,
            FieldPart::Interior => MaskLabel::Field,
        };
        mask.set(x, y, label);
    }
}

//! Biome mask pipeline.
//!
//! A per-cell label grid is painted by ordered passes, each taking the mask by
//! `&mut` and handing it on:
//!
//!   1. dense-forest border band
//!   2. octagonal settlement at the centre (may overwrite the border)
//!   3. oriented field rectangles, each with one ditch edge
//!   4. road network (see [`crate::paths`])
//!   5. forest / meadow split of what is left, then transition bush
//!
//! Apart from step 2, a pass only writes cells that are still unset.

pub mod border;
pub mod fields;
pub mod settlement;
pub mod vegetation;

use log::debug;
use rand::Rng;

use crate::cell::LandCover;
use crate::noise::CoverNoise;
use crate::paths::{self, PathGraph};
use fields::FieldPlot;

/// Transient classification used while the mask is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaskLabel {
    #[default]
    Unset,
    DenseForest,
    Settlement,
    Field,
    Ditch,
    Road,
    Forest,
    Meadow,
    Bush,
}

impl MaskLabel {
    /// Final land cover for a label. `Unset` cannot survive the vegetation
    /// pass; it maps to meadow so the table stays total.
    pub fn land_cover(self) -> LandCover {
        match self {
            MaskLabel::Unset       => LandCover::Meadow,
            MaskLabel::DenseForest => LandCover::DenseForest,
            MaskLabel::Settlement  => LandCover::Settlement,
            MaskLabel::Field       => LandCover::Field,
            MaskLabel::Ditch       => LandCover::Water,
            MaskLabel::Road        => LandCover::Road,
            MaskLabel::Forest      => LandCover::Forest,
            MaskLabel::Meadow      => LandCover::Meadow,
            MaskLabel::Bush        => LandCover::TransitionBush,
        }
    }
}

/// Row-major label grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    labels: Vec<MaskLabel>,
}

impl Mask {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, labels: vec![MaskLabel::Unset; width * height] }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> MaskLabel {
        self.labels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, label: MaskLabel) {
        self.labels[y * self.width + x] = label;
    }

    #[inline]
    pub fn is_unset(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == MaskLabel::Unset
    }

    /// Label at signed coordinates, `None` outside the grid.
    pub fn get_checked(&self, x: i64, y: i64) -> Option<MaskLabel> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some(self.get(x as usize, y as usize))
        }
    }

    /// Grid centre, where the settlement sits and the path graph is rooted.
    pub fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    pub fn labels(&self) -> &[MaskLabel] {
        &self.labels
    }

    pub fn count(&self, label: MaskLabel) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}

/// Everything produced by one run of the pipeline. Only `mask` feeds the
/// grid; the rest is kept for diagnostics and tests.
pub struct MaskLayout {
    pub mask: Mask,
    pub border_width: usize,
    pub fields: Vec<FieldPlot>,
    pub paths: PathGraph,
}

/// Run all passes in priority order.
pub fn build_mask<R: Rng>(
    rng: &mut R,
    width: usize,
    height: usize,
    cover: &CoverNoise,
) -> MaskLayout {
    let mut mask = Mask::new(width, height);

    let border_width = border::paint_border(rng, &mut mask);
    settlement::paint_settlement(&mut mask);
    let fields = fields::place_fields(rng, &mut mask);
    debug!(
        "mask: border {border_width} cells, {} fields, {} settlement cells",
        fields.len(),
        mask.count(MaskLabel::Settlement),
    );

    let paths = PathGraph::build(rng, &mask, &fields);
    paths::raster::rasterize(rng, &paths, &mut mask, border_width, cover);
    debug!(
        "paths: {} points, {} edges, {} road cells",
        paths.points.len(),
        paths.edges.len(),
        mask.count(MaskLabel::Road),
    );

    vegetation::classify_remaining(&mut mask, cover);
    vegetation::add_transition_bush(&mut mask);

    MaskLayout { mask, border_width, fields, paths }
}

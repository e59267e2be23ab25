//! Per-cell record of the assembled grid and the closed land-cover set.

use serde::{Deserialize, Serialize};

/// Land-cover classification of a single cell.
///
/// The last three variants are never produced by generation; they exist so
/// that snapshots written by older tools still import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LandCover {
    #[serde(alias = "grass")]
    Meadow,
    Field,
    Forest,
    DenseForest,
    #[serde(alias = "bush", alias = "reed")]
    TransitionBush,
    #[serde(alias = "lake", alias = "ditch")]
    Water,
    /// Older snapshots store roads under the `river` tag.
    #[serde(alias = "river")]
    Road,
    Building,
    #[serde(alias = "village")]
    Settlement,
    RiverSource,
    RiverMouth,
    Beach,
}

impl LandCover {
    /// Every variant, in declaration order.
    pub const ALL: [LandCover; 12] = [
        LandCover::Meadow,
        LandCover::Field,
        LandCover::Forest,
        LandCover::DenseForest,
        LandCover::TransitionBush,
        LandCover::Water,
        LandCover::Road,
        LandCover::Building,
        LandCover::Settlement,
        LandCover::RiverSource,
        LandCover::RiverMouth,
        LandCover::Beach,
    ];

    /// Water, dense forest and the settlement block movement; everything else
    /// can be walked.
    pub fn is_passable(self) -> bool {
        !matches!(self, LandCover::Water | LandCover::DenseForest | LandCover::Settlement)
    }

    /// Display colour for map rendering.
    pub fn color(self) -> [u8; 3] {
        match self {
            LandCover::Meadow         => [144, 200, 104],
            LandCover::Field          => [230, 214, 122],
            LandCover::Forest         => [ 52, 124,  44],
            LandCover::DenseForest    => [ 20,  72,  26],
            LandCover::TransitionBush => [106, 160,  70],
            LandCover::Water          => [ 64, 132, 214],
            LandCover::Road           => [176, 140,  96],
            LandCover::Building       => [150,  90,  70],
            LandCover::Settlement     => [196, 110,  80],
            LandCover::RiverSource    => [ 90, 170, 230],
            LandCover::RiverMouth     => [ 40, 100, 190],
            LandCover::Beach          => [238, 222, 164],
        }
    }

    /// Stable kebab-case name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            LandCover::Meadow         => "meadow",
            LandCover::Field          => "field",
            LandCover::Forest         => "forest",
            LandCover::DenseForest    => "dense-forest",
            LandCover::TransitionBush => "transition-bush",
            LandCover::Water          => "water",
            LandCover::Road           => "road",
            LandCover::Building       => "building",
            LandCover::Settlement     => "settlement",
            LandCover::RiverSource    => "river-source",
            LandCover::RiverMouth     => "river-mouth",
            LandCover::Beach          => "beach",
        }
    }
}

/// One grid element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub land_cover: LandCover,
    /// Absolute elevation inside the request's `[min, max]` range.
    pub elevation: f32,
    pub passable: bool,
    #[serde(default)]
    pub is_peak: bool,
    #[serde(default)]
    pub is_valley: bool,
}

impl Cell {
    /// A cell with passability derived from its land cover and no extremum flags.
    pub fn new(land_cover: LandCover, elevation: f32) -> Self {
        Self {
            land_cover,
            elevation,
            passable: land_cover.is_passable(),
            is_peak: false,
            is_valley: false,
        }
    }
}

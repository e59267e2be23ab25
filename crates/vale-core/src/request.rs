//! Generation parameters: grid size, elevation range and terrain presets.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValeError};

/// Grid side length used when a request leaves it out.
pub const DEFAULT_SIZE: usize = 1000;

/// Elevation range used when neither a preset nor explicit bounds are given.
pub const DEFAULT_ELEVATION: ElevationRange = ElevationRange { min: 100.0, max: 110.0 };

/// Named default elevation range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Lowlands,
    Hills,
    Mountains,
}

impl Preset {
    pub fn elevation_range(self) -> ElevationRange {
        match self {
            Preset::Lowlands  => ElevationRange { min:  98.0, max: 105.0 },
            Preset::Hills     => ElevationRange { min: 120.0, max: 170.0 },
            Preset::Mountains => ElevationRange { min: 300.0, max: 500.0 },
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lowlands" => Ok(Preset::Lowlands),
            "hills" => Ok(Preset::Hills),
            "mountains" => Ok(Preset::Mountains),
            other => Err(format!("unknown preset `{other}` (expected lowlands, hills or mountains)")),
        }
    }
}

/// Inclusive elevation bounds in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationRange {
    pub min: f32,
    pub max: f32,
}

impl ElevationRange {
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// What to generate. Every field except the dimensions is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default = "default_size")]
    pub width: usize,
    #[serde(default = "default_size")]
    pub height: usize,
    #[serde(default)]
    pub preset: Option<Preset>,
    #[serde(default)]
    pub min_elevation: Option<f32>,
    #[serde(default)]
    pub max_elevation: Option<f32>,
    /// Fixes every random draw of the call. `None` picks a fresh seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            preset: None,
            min_elevation: None,
            max_elevation: None,
            seed: None,
        }
    }
}

impl GenerationRequest {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn with_elevation(mut self, min: f32, max: f32) -> Self {
        self.min_elevation = Some(min);
        self.max_elevation = Some(max);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective elevation range: explicit bounds override the preset bound by
    /// bound, the preset overrides the built-in default.
    pub fn elevation_range(&self) -> ElevationRange {
        let base = self.preset.map_or(DEFAULT_ELEVATION, Preset::elevation_range);
        ElevationRange {
            min: self.min_elevation.unwrap_or(base.min),
            max: self.max_elevation.unwrap_or(base.max),
        }
    }

    /// Reject requests that cannot produce a grid.
    pub fn validate(&self) -> Result<ElevationRange> {
        if self.width == 0 || self.height == 0 {
            return Err(ValeError::InvalidDimensions { width: self.width, height: self.height });
        }
        let range = self.elevation_range();
        if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
            return Err(ValeError::InvalidElevationRange { min: range.min, max: range.max });
        }
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_supplies_range() {
        let r = GenerationRequest::new(10, 10).with_preset(Preset::Hills).elevation_range();
        assert_eq!(r, ElevationRange { min: 120.0, max: 170.0 });
    }

    #[test]
    fn explicit_bounds_override_preset_individually() {
        let mut req = GenerationRequest::new(10, 10).with_preset(Preset::Mountains);
        req.max_elevation = Some(450.0);
        assert_eq!(req.elevation_range(), ElevationRange { min: 300.0, max: 450.0 });
    }

    #[test]
    fn no_preset_falls_back_to_default() {
        assert_eq!(GenerationRequest::new(5, 5).elevation_range(), DEFAULT_ELEVATION);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            GenerationRequest::new(0, 10).validate(),
            Err(ValeError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(GenerationRequest::new(10, 0).validate().is_err());
    }

    #[test]
    fn inverted_range_rejected() {
        let req = GenerationRequest::new(10, 10).with_elevation(50.0, 20.0);
        assert!(matches!(req.validate(), Err(ValeError::InvalidElevationRange { .. })));
    }

    #[test]
    fn request_parses_from_camel_case_json() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"width": 64, "height": 32, "preset": "lowlands", "maxElevation": 104.0, "seed": 7}"#,
        )
        .unwrap();
        assert_eq!(req.width, 64);
        assert_eq!(req.preset, Some(Preset::Lowlands));
        assert_eq!(req.elevation_range(), ElevationRange { min: 98.0, max: 104.0 });
        assert_eq!(req.seed, Some(7));
    }

    #[test]
    fn preset_from_str_is_case_insensitive() {
        assert_eq!("Mountains".parse::<Preset>(), Ok(Preset::Mountains));
        assert!("plains".parse::<Preset>().is_err());
    }
}

//! Final mask passes: forest/meadow split and transition bush.

use super::{Mask, MaskLabel};
use crate::grid::neighbors8;
use crate::noise::CoverNoise;

/// Classify every still-unset cell as forest or meadow.
pub fn classify_remaining(mask: &mut Mask, cover: &CoverNoise) {
    for y in 0..mask.height {
        for x in 0..mask.width {
            if !mask.is_unset(x, y) {
                continue;
            }
            let label = if cover.is_forest(x as f64, y as f64) {
                MaskLabel::Forest
            } else {
                MaskLabel::Meadow
            };
            mask.set(x, y, label);
        }
    }
}

/// Turn meadow touching forest (8-neighbourhood) into bush.
///
/// Only forest cells count, and bush never converts further meadow, so the
/// result does not depend on scan order.
pub fn add_transition_bush(mask: &mut Mask) {
    let mut to_bush = Vec::new();
    for y in 0..mask.height {
        for x in 0..mask.width {
            if mask.get(x, y) != MaskLabel::Meadow {
                continue;
            }
            if neighbors8(x, y, mask.width, mask.height).any(|(nx, ny)| mask.get(nx, ny) == MaskLabel::Forest) {
                to_bush.push((x, y));
            }
        }
    }
    for (x, y) in to_bush {
        mask.set(x, y, MaskLabel::Bush);
    }
}

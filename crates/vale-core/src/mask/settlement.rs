//! Octagonal settlement block at the grid centre.

use super::{Mask, MaskLabel};

/// Settlement "radius" in cells.
pub const SETTLEMENT_RADIUS: f64 = 50.0;

/// Octagon test: Chebyshev distance with a diagonal correction.
#[inline]
pub fn in_settlement(dx: f64, dy: f64) -> bool {
    let (ax, ay) = (dx.abs(), dy.abs());
    ax.max(ay) + 0.4 * ax.min(ay) < SETTLEMENT_RADIUS
}

/// Label the octagon. Overwrites anything already there.
pub fn paint_settlement(mask: &mut Mask) {
    let (cx, cy) = mask.center();
    let r = SETTLEMENT_RADIUS.ceil() as usize;
    let x0 = cx.saturating_sub(r);
    let y0 = cy.saturating_sub(r);
    let x1 = (cx + r).min(mask.width.saturating_sub(1));
    let y1 = (cy + r).min(mask.height.saturating_sub(1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            if in_settlement(x as f64 - cx as f64, y as f64 - cy as f64) {
                mask.set(x, y, MaskLabel::Settlement);
            }
        }
    }
}

//! Stamp path-graph edges into the mask as roads.
//!
//! Each edge is walked in unit steps along its longer axis. Every sample gets a
//! smooth sinusoidal wobble plus a little uniform noise and is stamped as a
//! disc whose diameter falls from 8 cells next to the settlement to 1 cell at
//! the inner edge of the forest border. Stamps only claim unset or meadow cells.

use rand::Rng;

use super::{PathGraph, Waypoint};
use crate::mask::settlement::SETTLEMENT_RADIUS;
use crate::mask::{Mask, MaskLabel};
use crate::noise::CoverNoise;

/// Road diameter next to the settlement.
pub const MAX_ROAD_WIDTH: usize = 8;

/// Amplitude of the sinusoidal wobble, in cells.
const WOBBLE: f64 = 1.2;

/// Full width of the uniform jitter, in cells.
const JITTER: f64 = 0.5;

/// Road diameter at distance `dist` from the centre.
///
/// `span` is the stretch between the settlement edge and the forest border;
/// a non-positive span (tiny maps) is treated as 1.
pub fn road_width(dist: f64, span: f64) -> usize {
    let span = if span > 0.0 { span } else { 1.0 };
    let w = (MAX_ROAD_WIDTH as f64 - (MAX_ROAD_WIDTH as f64 - 1.0) * (dist - SETTLEMENT_RADIUS) / span).round();
    w.clamp(1.0, MAX_ROAD_WIDTH as f64) as usize
}

/// Rasterise every edge of `graph` into `mask`.
pub fn rasterize<R: Rng>(
    rng: &mut R,
    graph: &PathGraph,
    mask: &mut Mask,
    border_width: usize,
    cover: &CoverNoise,
) {
    let span = mask.width.min(mask.height) as f64 / 2.0 - border_width as f64 - SETTLEMENT_RADIUS;
    for &(a, b) in &graph.edges {
        draw_edge(rng, mask, graph.points[a], graph.points[b], span, cover);
    }
}

fn draw_edge<R: Rng>(
    rng: &mut R,
    mask: &mut Mask,
    from: Waypoint,
    to: Waypoint,
    span: f64,
    cover: &CoverNoise,
) {
    let (cx, cy) = mask.center();
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    // Zero-length edges still stamp their endpoint once.
    let steps = dx.abs().max(dy.abs()).max(1.0) as usize;

    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let px = from.x as f64 + dx * t
            + (t * 5.0 + cover.phase_x).sin() * WOBBLE
            + (rng.gen::<f64>() - 0.5) * JITTER;
        let py = from.y as f64 + dy * t
            + (t * 5.0 + cover.phase_y).cos() * WOBBLE
            + (rng.gen::<f64>() - 0.5) * JITTER;
        let (xi, yi) = (px.round() as i64, py.round() as i64);
        if mask.get_checked(xi, yi).is_none() {
            continue;
        }
        let dist = ((xi - cx as i64) as f64).hypot((yi - cy as i64) as f64);
        stamp_disc(mask, xi, yi, road_width(dist, span));
    }
}

/// Claim a disc of road around `(x, y)`.
fn stamp_disc(mask: &mut Mask, x: i64, y: i64, diameter: usize) {
    let half = (diameter / 2) as i64;
    let reach = half * half + half;
    for oy in -half..=half {
        for ox in -half..=half {
            if ox * ox + oy * oy > reach {
                continue;
            }
            let (nx, ny) = (x + ox, y + oy);
            if matches!(mask.get_checked(nx, ny), Some(MaskLabel::Unset | MaskLabel::Meadow)) {
                mask.set(nx as usize, ny as usize, MaskLabel::Road);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn width_tapers_from_eight_to_one() {
        assert_eq!(road_width(SETTLEMENT_RADIUS, 400.0), 8);
        assert_eq!(road_width(0.0, 400.0), 8);
        assert_eq!(road_width(SETTLEMENT_RADIUS + 400.0, 400.0), 1);
        assert_eq!(road_width(SETTLEMENT_RADIUS + 2000.0, 400.0), 1);
        let mid = road_width(SETTLEMENT_RADIUS + 200.0, 400.0);
        assert!((4..=5).contains(&mid), "mid-span width {mid}");
    }

    #[test]
    fn degenerate_span_does_not_panic() {
        assert_eq!(road_width(120.0, 0.0), 1);
        assert_eq!(road_width(10.0, -30.0), 8);
    }

    #[test]
    fn single_cell_stamp() {
        let mut mask = Mask::new(5, 5);
        stamp_disc(&mut mask, 2, 2, 1);
        assert_eq!(mask.count(MaskLabel::Road), 1);
        assert_eq!(mask.get(2, 2), MaskLabel::Road);
    }

    #[test]
    fn stamps_never_overwrite_claimed_cells() {
        let mut mask = Mask::new(20, 20);
        mask.set(10, 10, MaskLabel::Field);
        mask.set(11, 10, MaskLabel::Ditch);
        mask.set(9, 10, MaskLabel::Meadow);
        stamp_disc(&mut mask, 10, 10, 8);
        assert_eq!(mask.get(10, 10), MaskLabel::Field);
        assert_eq!(mask.get(11, 10), MaskLabel::Ditch);
        assert_eq!(mask.get(9, 10), MaskLabel::Road);
    }

    #[test]
    fn straight_edge_leaves_a_continuous_trail() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut mask = Mask::new(200, 200);
        let graph = PathGraph {
            points: vec![Waypoint { x: 20, y: 100 }, Waypoint { x: 180, y: 100 }],
            edges: vec![(0, 1)],
        };
        let cover = CoverNoise::with_phases(0.0, 0.0, 0.0);
        rasterize(&mut rng, &graph, &mut mask, 15, &cover);
        // Wobble is under 2 cells, so each column near the line has road.
        for x in 25..175 {
            let hit = (96..=104).any(|y| mask.get(x, y) == MaskLabel::Road);
            assert!(hit, "column {x} has no road");
        }
    }

    #[test]
    fn zero_length_edge_stamps_once() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut mask = Mask::new(300, 300);
        let graph = PathGraph {
            points: vec![Waypoint { x: 150, y: 150 }, Waypoint { x: 150, y: 150 }],
            edges: vec![(0, 1)],
        };
        rasterize(&mut rng, &graph, &mut mask, 20, &CoverNoise::with_phases(1.0, 2.0, 3.0));
        assert!(mask.count(MaskLabel::Road) > 0);
    }
}

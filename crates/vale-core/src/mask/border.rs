//! Dense-forest band along the map edge.

use rand::Rng;

use super::{Mask, MaskLabel};

/// Band width is drawn from `[MIN_WIDTH, MAX_WIDTH)`.
pub const MIN_WIDTH: usize = 15;
pub const MAX_WIDTH: usize = 30;

/// Paint the border band and return its nominal width.
///
/// The per-cell threshold is jittered by an integer in `-2..=1` so the inner
/// edge of the band is ragged.
pub fn paint_border<R: Rng>(rng: &mut R, mask: &mut Mask) -> usize {
    let band = rng.gen_range(MIN_WIDTH..MAX_WIDTH);
    let (w, h) = (mask.width as i64, mask.height as i64);
    for y in 0..h {
        for x in 0..w {
            let edge_dist = x.min(y).min(w - 1 - x).min(h - 1 - y);
            let jitter: i64 = rng.gen_range(-2..=1);
            if edge_dist + jitter < band as i64 {
                mask.set(x as usize, y as usize, MaskLabel::DenseForest);
            }
        }
    }
    band
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn outer_ring_always_forest_interior_never() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut mask = Mask::new(120, 100);
        let band = paint_border(&mut rng, &mut mask);
        assert!((MIN_WIDTH..MAX_WIDTH).contains(&band));

        for y in 0..100 {
            for x in 0..120 {
                let d = x.min(y).min(119 - x).min(99 - y);
                let label = mask.get(x, y);
                if d + 1 < band {
                    // jitter is at most +1
                    assert_eq!(label, MaskLabel::DenseForest, "({x},{y}) d={d}");
                } else if d >= band + 2 {
                    assert_eq!(label, MaskLabel::Unset, "({x},{y}) d={d}");
                }
            }
        }
    }

    #[test]
    fn inner_edge_is_irregular() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut mask = Mask::new(200, 200);
        let band = paint_border(&mut rng, &mut mask);
        // Along a column in the jitter zone, both labels must occur.
        let mut forest = 0;
        let mut open = 0;
        for y in 60..140 {
            match mask.get(band, y) {
                MaskLabel::DenseForest => forest += 1,
                _ => open += 1,
            }
        }
        assert!(forest > 0 && open > 0, "forest={forest} open={open}");
    }
}

//! Path network over landmark points.
//!
//! Points: the settlement centre (index 0), 15–25 random waypoints outside the
//! settlement and the forest border, and the centroid of every field that is
//! not already next to a waypoint.
//!
//! Edges: a Prim minimum spanning tree rooted at the settlement, plus one edge
//! from every point to its nearest neighbour (adds loops), plus one connector
//! per field centroid. The graph is connected by construction.

pub mod raster;

use std::collections::VecDeque;

use rand::Rng;

use crate::mask::fields::FieldPlot;
use crate::mask::settlement::SETTLEMENT_RADIUS;
use crate::mask::{Mask, MaskLabel};

/// Attempts per random waypoint.
pub const WAYPOINT_ATTEMPTS: usize = 100;

/// Minimum clearance of a waypoint from the settlement centre.
pub const SETTLEMENT_CLEARANCE: f64 = SETTLEMENT_RADIUS + 10.0;

/// A field centroid within this squared distance of a point is already served.
pub const SERVED_DIST_SQ: i64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waypoint {
    pub x: i64,
    pub y: i64,
}

impl Waypoint {
    #[inline]
    pub fn dist_sq(self, other: Waypoint) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Landmark points and undirected edges between them.
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    /// `points[0]` is always the settlement centre.
    pub points: Vec<Waypoint>,
    /// Unordered index pairs, no duplicates, no self-loops.
    pub edges: Vec<(usize, usize)>,
}

impl PathGraph {
    /// Sample waypoints on `mask` and connect them together with `fields`.
    pub fn build<R: Rng>(rng: &mut R, mask: &Mask, fields: &[FieldPlot]) -> Self {
        let mut graph = Self { points: sample_waypoints(rng, mask), edges: Vec::new() };
        graph.connect_spanning_tree();
        graph.connect_nearest_neighbours();
        graph.connect_fields(fields);
        graph
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.iter().any(|&(p, q)| (p == a && q == b) || (p == b && q == a))
    }

    /// Insert `a–b` unless it is a self-loop or already present.
    pub fn add_edge(&mut self, a: usize, b: usize) -> bool {
        if a == b || self.has_edge(a, b) {
            return false;
        }
        self.edges.push((a, b));
        true
    }

    /// Nearest point to `p` by squared distance, skipping `skip`.
    pub fn nearest(&self, p: Waypoint, skip: Option<usize>) -> Option<(usize, i64)> {
        self.points
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != skip)
            .map(|(i, &q)| (i, p.dist_sq(q)))
            .min_by_key(|&(_, d)| d)
    }

    /// O(n²) Prim over squared Euclidean distance, rooted at point 0.
    fn connect_spanning_tree(&mut self) {
        let n = self.points.len();
        if n < 2 {
            return;
        }
        let mut in_tree = vec![false; n];
        let mut best = vec![i64::MAX; n];
        let mut parent = vec![0usize; n];
        in_tree[0] = true;
        for i in 1..n {
            best[i] = self.points[0].dist_sq(self.points[i]);
        }
        for _ in 1..n {
            let Some(next) = (0..n).filter(|&i| !in_tree[i]).min_by_key(|&i| best[i]) else {
                break;
            };
            in_tree[next] = true;
            self.edges.push((parent[next], next));
            for i in 0..n {
                if !in_tree[i] {
                    let d = self.points[next].dist_sq(self.points[i]);
                    if d < best[i] {
                        best[i] = d;
                        parent[i] = next;
                    }
                }
            }
        }
    }

    /// Give every point an edge to its nearest other point.
    fn connect_nearest_neighbours(&mut self) {
        for i in 0..self.points.len() {
            if let Some((j, _)) = self.nearest(self.points[i], Some(i)) {
                self.add_edge(i, j);
            }
        }
    }

    /// Add each unserved field centroid as a point wired to its nearest point.
    fn connect_fields(&mut self, fields: &[FieldPlot]) {
        for field in fields {
            let (fx, fy) = field.centroid_cell();
            let centroid = Waypoint { x: fx, y: fy };
            let Some((nearest, d)) = self.nearest(centroid, None) else {
                continue;
            };
            if d > SERVED_DIST_SQ {
                self.points.push(centroid);
                let idx = self.points.len() - 1;
                self.add_edge(idx, nearest);
            }
        }
    }

    /// Breadth-first reachability from the settlement.
    pub fn is_connected(&self) -> bool {
        let n = self.points.len();
        if n == 0 {
            return true;
        }
        let mut adj = vec![Vec::new(); n];
        for &(a, b) in &self.edges {
            adj[a].push(b);
            adj[b].push(a);
        }
        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([0usize]);
        seen[0] = true;
        while let Some(i) = queue.pop_front() {
            for &j in &adj[i] {
                if !seen[j] {
                    seen[j] = true;
                    queue.push_back(j);
                }
            }
        }
        seen.into_iter().all(|s| s)
    }
}

/// Settlement centre plus up to 14–24 random waypoints.
fn sample_waypoints<R: Rng>(rng: &mut R, mask: &Mask) -> Vec<Waypoint> {
    let (cx, cy) = mask.center();
    let center = Waypoint { x: cx as i64, y: cy as i64 };
    let target: usize = rng.gen_range(15..=25);
    let clearance_sq = SETTLEMENT_CLEARANCE * SETTLEMENT_CLEARANCE;

    let mut points = Vec::with_capacity(target);
    points.push(center);
    for _ in 1..target {
        for _ in 0..WAYPOINT_ATTEMPTS {
            let x = rng.gen_range(0..mask.width);
            let y = rng.gen_range(0..mask.height);
            if matches!(mask.get(x, y), MaskLabel::DenseForest | MaskLabel::Settlement) {
                continue;
            }
            let p = Waypoint { x: x as i64, y: y as i64 };
            if (p.dist_sq(center) as f64) < clearance_sq {
                continue;
            }
            points.push(p);
            break;
        }
    }
    log::debug!("paths: {}/{target} waypoints placed", points.len());
    points
}

use crate::geo::{self, Bbox, Vec2};
use crate::graph::Graph;

/// Trial distances from the segment centroid. Smaller distances come first
/// to keep the drawing compact, but the order is deliberately not monotonic
/// so a slightly farther slot can win before jumping way out.
const TRIAL_DISTANCES: [f64; 13] = [
    55.0, 80.0, 70.0, 110.0, 95.0, 140.0, 125.0, 170.0, 200.0, 185.0, 240.0, 280.0, 320.0,
];

/// Candidates closer than this to the drawing's edge are rejected.
pub(crate) const BOUNDS_MARGIN: f64 = 20.0;

/// Minimum distance between any two vertices.
pub(crate) const MIN_VERTEX_GAP: f64 = 25.0;

/// How far from the segment centroid the direction probes sit.
const PROBE_LENGTH: f64 = 30.0;

impl Graph {
    /// Search for a planar, non-overlapping position for a new vertex
    /// attached to `segment`, outside the current drawing.
    pub fn find_position(&self, segment: &[usize], bounds: &Bbox) -> Option<Vec2> {
        let pts: Vec<Vec2> = segment.iter().map(|&s| self.pos(s)).collect();
        let seg_centroid = geo::centroid(&pts);
        let dir = self.outward_direction(segment, seg_centroid);

        let inner = bounds.shrink(BOUNDS_MARGIN);

        for &d in &TRIAL_DISTANCES {
            let candidate = seg_centroid + dir * d;

            if !inner.contains(candidate) {
                continue;
            }
            if self
                .vertices
                .iter()
                .any(|v| v.pos.dist(candidate) < MIN_VERTEX_GAP)
            {
                continue;
            }
            if self.connections_cross(candidate, segment) {
                continue;
            }

            return Some(candidate);
        }

        None
    }

    fn outward_direction(&self, segment: &[usize], seg_centroid: Vec2) -> Vec2 {
        if segment.len() == 2 {
            let edge = self.pos(segment[1]) - self.pos(segment[0]);
            let norm = edge.norm();
            if norm == 0.0 {
                return Vec2::new(1.0, 0.0);
            }
            let side = edge.perp() / norm;

            // Probe both sides of the edge; the side whose probe point is
            // farther on average from the rest of the graph faces outward.
            let others: Vec<Vec2> = (0..self.vertices.len())
                .filter(|i| !segment.contains(i))
                .map(|i| self.pos(i))
                .collect();
            if others.is_empty() {
                return side;
            }

            let avg_dist = |dir: Vec2| {
                let probe = seg_centroid + dir * PROBE_LENGTH;
                others.iter().map(|p| p.dist(probe)).sum::<f64>() / others.len() as f64
            };

            if avg_dist(side) >= avg_dist(side * -1.0) {
                side
            } else {
                side * -1.0
            }
        } else {
            // Larger segments point away from the graph's mass.
            let out = seg_centroid - self.centroid();
            let norm = out.norm();
            if norm < 1e-9 {
                Vec2::new(1.0, 0.0)
            } else {
                out / norm
            }
        }
    }

    /// Would connecting `candidate` to every segment vertex cross an
    /// existing edge? Edges touching the segment are expected to share
    /// endpoints with the new connections and are skipped.
    fn connections_cross(&self, candidate: Vec2, segment: &[usize]) -> bool {
        for &(i, j) in &self.edges {
            if segment.contains(&i) || segment.contains(&j) {
                continue;
            }

            for &s in segment {
                if geo::segments_properly_cross(candidate, self.pos(s), self.pos(i), self.pos(j)) {
                    return true;
                }
            }
        }

        false
    }
}

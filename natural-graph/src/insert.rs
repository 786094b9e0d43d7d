use rand::seq::SliceRandom;
use rand::Rng;

use crate::geo::{point_in_triangle, Bbox, Vec2};
use crate::graph::{Graph, GraphError, Vertex};

/// Longest segment the random driver tries; bounds the search while still
/// varying how much of the periphery a new vertex swallows.
const MAX_RANDOM_SEGMENT: usize = 5;

impl Graph {
    /// Attach a new vertex to a fully connected periphery `segment`.
    ///
    /// The commit is atomic: on any rejection the receiver is left as the
    /// current value and only the error comes back.
    pub fn insert(&self, segment: &[usize], bounds: &Bbox) -> Result<Graph, GraphError> {
        if self.vertices.len() < 3 {
            return Err(GraphError::InsufficientVertices);
        }
        if !self.is_fully_connected(segment) {
            return Err(GraphError::InvalidSegment);
        }

        let pos = self
            .find_position(segment, bounds)
            .ok_or(GraphError::NoPlacementFound)?;

        Ok(self.insert_at(segment, pos))
    }

    /// Grow by one vertex somewhere on the periphery: try segment lengths
    /// 2..=5 and, within each length, randomly ordered start offsets, until
    /// a fully connected segment with a free position turns up.
    pub fn insert_random(&self, bounds: &Bbox, rng: &mut impl Rng) -> Result<Graph, GraphError> {
        if self.vertices.len() < 3 {
            return Err(GraphError::InsufficientVertices);
        }

        let periphery = self.periphery();

        for len in 2..=periphery.len().min(MAX_RANDOM_SEGMENT) {
            let mut offsets: Vec<usize> = (0..periphery.len()).collect();
            offsets.shuffle(rng);

            for off in offsets {
                let segment: Vec<usize> = (0..len)
                    .map(|k| periphery[(off + k) % periphery.len()])
                    .collect();

                if !self.is_fully_connected(&segment) {
                    continue;
                }
                if let Some(pos) = self.find_position(&segment, bounds) {
                    return Ok(self.insert_at(&segment, pos));
                }
            }
        }

        Err(GraphError::NoPlacementFound)
    }

    /// The placement-free commit step: wire up the new vertex, close the
    /// segment's boundary cycle and repair any enclosed vertices.
    pub(crate) fn insert_at(&self, segment: &[usize], pos: Vec2) -> Graph {
        let mut g = self.clone();

        let new = g.vertices.len();
        g.vertices.push(Vertex {
            id: g.next_id(),
            pos,
            color: None,
        });

        for &s in segment {
            g.add_edge(new, s);
        }

        // With the connectivity gate upheld these edges already exist, but
        // the face the new vertex subdivides must be a closed cycle.
        for (u, w) in cycle_pairs(segment) {
            g.add_edge(u, w);
        }

        g.repair_enclosed(segment, new);

        g
    }

    // A new triangle can swallow previously placed vertices; wire each one
    // to all three corners so the triangulation stays valid.
    fn repair_enclosed(&mut self, segment: &[usize], new: usize) {
        let apex = self.pos(new);

        for (u, w) in cycle_pairs(segment) {
            let (a, b) = (self.pos(u), self.pos(w));

            for p in 0..self.vertices.len() {
                if p == new || p == u || p == w {
                    continue;
                }

                if point_in_triangle(self.pos(p), a, b, apex) {
                    self.add_edge(p, u);
                    self.add_edge(p, w);
                    self.add_edge(p, new);
                }
            }
        }
    }
}

/// Consecutive pairs of `segment` including the closing wraparound pair;
/// a two-vertex segment has a single pair.
fn cycle_pairs(segment: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let pairs = if segment.len() == 2 { 1 } else { segment.len() };

    (0..pairs).map(move |k| (segment[k], segment[(k + 1) % segment.len()]))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn bounds() -> Bbox {
        let mut b = Bbox::new(Vec2::zero());
        b.expand(Vec2::new(800.0, 800.0));
        b
    }

    #[test]
    fn insert_on_an_edge_segment() {
        let g = Graph::seed(&bounds());
        let g2 = g.insert(&[0, 1], &bounds()).unwrap();

        assert_eq!(g2.vertices.len(), 4);
        assert_eq!(g2.vertices[3].id, 4);
        assert!(g2.has_edge(3, 0) && g2.has_edge(3, 1));
        assert!(!g2.has_edge(3, 2));
        // untouched receiver
        assert_eq!(g.vertices.len(), 3);
    }

    #[test]
    fn insert_on_the_whole_periphery() {
        let g = Graph::seed(&bounds());
        let g2 = g.insert(&[0, 1, 2], &bounds()).unwrap();

        assert_eq!(g2.vertices.len(), 4);
        for s in 0..3 {
            assert!(g2.has_edge(3, s));
        }
        // the new corner plus any two seed corners is a clique
        assert!(g2.is_fully_connected(&[3, 0, 1]));
    }

    #[test]
    fn unconnected_segment_is_rejected() {
        let g = Graph::seed(&bounds());
        let g2 = g.insert(&[0, 1], &bounds()).unwrap();

        // vertices 2 and 3 are not adjacent
        assert_eq!(
            g2.insert(&[2, 3], &bounds()),
            Err(GraphError::InvalidSegment)
        );
        assert_eq!(g2.insert(&[0], &bounds()), Err(GraphError::InvalidSegment));
    }

    #[test]
    fn insert_needs_a_seed() {
        let g = Graph::new();
        assert_eq!(
            g.insert(&[], &bounds()),
            Err(GraphError::InsufficientVertices)
        );
    }

    #[test]
    fn enclosed_vertex_gets_repaired() {
        // Triangle a-b-c with m triangulated inside it, near the a-b edge.
        // A new vertex far on the other side of a-b forms a triangle that
        // encloses m, so m must be wired to the new vertex too.
        let mut g = Graph::new();
        for (id, x, y) in &[
            (1, 100.0, 300.0), // a
            (2, 300.0, 300.0), // b
            (3, 200.0, 400.0), // c
            (4, 200.0, 280.0), // m
        ] {
            g.vertices.push(Vertex {
                id: *id,
                pos: Vec2::new(*x, *y),
                color: None,
            });
        }
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 2);
        g.add_edge(0, 3);
        g.add_edge(1, 3);
        g.add_edge(2, 3);

        let g2 = g.insert_at(&[0, 1], Vec2::new(200.0, 150.0));

        assert_eq!(g2.vertices.len(), 5);
        assert!(g2.has_edge(4, 0) && g2.has_edge(4, 1));
        assert!(g2.has_edge(3, 4), "enclosed vertex not wired to the apex");
        assert!(g2.has_edge(3, 0) && g2.has_edge(3, 1));
    }

    #[test]
    fn random_growth_succeeds_on_a_fresh_seed() {
        let mut rng = Pcg64::seed_from_u64(7);
        let g = Graph::seed(&bounds());

        let g2 = g.insert_random(&bounds(), &mut rng).unwrap();
        assert_eq!(g2.vertices.len(), 4);
        assert!(g2.edges.len() >= g.edges.len() + 2);
    }

    #[test]
    fn random_growth_reports_exhaustion() {
        let g = Graph::seed(&bounds());

        let mut tight = Bbox::new(g.pos(0));
        tight.expand(g.pos(1));
        tight.expand(g.pos(2));

        let mut rng = Pcg64::seed_from_u64(7);
        assert_eq!(
            g.insert_random(&tight, &mut rng),
            Err(GraphError::NoPlacementFound)
        );
    }
}

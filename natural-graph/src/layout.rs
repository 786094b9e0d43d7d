use std::collections::BTreeSet;

use log::warn;
use rand::Rng;

use crate::geo::{Bbox, Vec2};
use crate::graph::{edge_key, seed_positions, Graph, GraphError, Vertex};
use crate::place::{BOUNDS_MARGIN, MIN_VERTEX_GAP};

/// Random in-bounds samples tried before giving up on a free-floating
/// placement and dropping the vertex near the center.
const FALLBACK_SAMPLES: usize = 50;

const CENTER_JITTER: f64 = 40.0;

impl Graph {
    /// Rebuild every vertex position from scratch by replaying the
    /// construction in id order, while preserving the edge set exactly.
    ///
    /// Each replayed vertex lands on the periphery segment matching most of
    /// its original neighbors; vertices whose original attachment cannot be
    /// reproduced (a possibility once interior repair has densified the
    /// graph) fall back to a free random position. All original edges are
    /// re-added regardless of where each vertex ends up.
    pub fn relayout(&self, bounds: &Bbox, rng: &mut impl Rng) -> Result<Graph, GraphError> {
        if self.vertices.len() < 3 {
            return Err(GraphError::InsufficientVertices);
        }

        let mut out = Graph {
            vertices: Vec::with_capacity(self.vertices.len()),
            edges: BTreeSet::new(),
            palette: self.palette.clone(),
        };

        for (v, &pos) in self.vertices.iter().zip(seed_positions(bounds).iter()) {
            out.vertices.push(Vertex {
                id: v.id,
                pos,
                color: v.color,
            });
        }
        for &(i, j) in &self.edges {
            if i < 3 && j < 3 {
                out.add_edge(i, j);
            }
        }

        for i in 3..self.vertices.len() {
            let placed_neighbors: Vec<usize> =
                self.neighbors(i).into_iter().filter(|&j| j < i).collect();

            match out.best_segment_for(&placed_neighbors, bounds) {
                Some((pos, segment)) => {
                    out.vertices.push(Vertex {
                        id: self.vertices[i].id,
                        pos,
                        color: self.vertices[i].color,
                    });

                    for &j in &placed_neighbors {
                        out.add_edge(i, j);
                    }
                    // close the cycle only along edges the graph really has
                    for k in 0..segment.len() {
                        let (u, w) = (segment[k], segment[(k + 1) % segment.len()]);
                        if self.edges.contains(&edge_key(u, w)) {
                            out.add_edge(u, w);
                        }
                    }
                }
                None => {
                    warn!(
                        "no periphery segment reproduces vertex {}, placing it freely",
                        self.vertices[i].id
                    );

                    let pos = out.free_position(bounds, rng);
                    out.vertices.push(Vertex {
                        id: self.vertices[i].id,
                        pos,
                        color: self.vertices[i].color,
                    });

                    for &j in &placed_neighbors {
                        out.add_edge(i, j);
                    }
                }
            }
        }

        for &e in &self.edges {
            if out.edges.insert(e) {
                warn!("re-adding original edge {:?} missed by the replay", e);
            }
        }

        Ok(out)
    }

    /// Best periphery segment for a vertex whose original neighbors are
    /// `wanted`: every consecutive run is scored by how many of them it
    /// covers, and the best-scoring run that is fully connected and has a
    /// free position wins.
    fn best_segment_for(
        &self,
        wanted: &[usize],
        bounds: &Bbox,
    ) -> Option<(Vec2, Vec<usize>)> {
        let periphery = self.periphery();
        if periphery.len() < 2 {
            return None;
        }

        let mut candidates: Vec<(usize, Vec<usize>)> = vec![];
        for len in 2..=periphery.len() {
            for off in 0..periphery.len() {
                let segment: Vec<usize> = (0..len)
                    .map(|k| periphery[(off + k) % periphery.len()])
                    .collect();

                let score = segment.iter().filter(|&s| wanted.contains(s)).count();
                if score > 0 {
                    candidates.push((score, segment));
                }
            }
        }

        candidates.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, segment) in candidates {
            if !self.is_fully_connected(&segment) {
                continue;
            }
            if let Some(pos) = self.find_position(&segment, bounds) {
                return Some((pos, segment));
            }
        }

        None
    }

    fn free_position(&self, bounds: &Bbox, rng: &mut impl Rng) -> Vec2 {
        let inner = bounds.shrink(BOUNDS_MARGIN);

        if inner.width() > 0.0 && inner.height() > 0.0 {
            for _ in 0..FALLBACK_SAMPLES {
                let p = Vec2::new(
                    rng.gen_range(inner.min().x, inner.max().x),
                    rng.gen_range(inner.min().y, inner.max().y),
                );

                if self.vertices.iter().all(|v| v.pos.dist(p) >= MIN_VERTEX_GAP) {
                    return p;
                }
            }
        }

        bounds.center()
            + Vec2::new(
                rng.gen_range(-CENTER_JITTER, CENTER_JITTER),
                rng.gen_range(-CENTER_JITTER, CENTER_JITTER),
            )
    }
}

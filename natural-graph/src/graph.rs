use std::collections::BTreeSet;
use std::f64::consts::PI;

use thiserror::Error;

use crate::geo::{Bbox, Vec2};

pub const DEFAULT_PALETTE: [u32; 4] = [1, 2, 3, 4];

/// Circumradius of the seed triangle, also used when re-layout re-seeds the
/// first three vertices.
pub const SEED_RADIUS: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Stable, monotonically assigned, never reused.
    pub id: u32,
    pub pos: Vec2,
    /// 1-based palette index, `None` until the vertex gets colored.
    pub color: Option<u32>,
}

/// A planar graph grown one vertex at a time. Edges are canonical
/// `(min, max)` index pairs into `vertices`.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    pub edges: BTreeSet<(usize, usize)>,
    pub palette: Vec<u32>,
}

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("selection is not a consecutive, fully connected periphery segment")]
    InvalidSegment,
    #[error("no crossing-free position exists for this segment")]
    NoPlacementFound,
    #[error("operation needs a seeded graph of at least 3 vertices")]
    InsufficientVertices,
    #[error("malformed graph data: {0}")]
    MalformedImport(String),
}

pub fn edge_key(i: usize, j: usize) -> (usize, usize) {
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}

/// Seed triangle corners: a fixed-radius triangle centered in `bounds`.
pub(crate) fn seed_positions(bounds: &Bbox) -> [Vec2; 3] {
    let c = bounds.center();

    let corner = |k: f64| {
        let a = -PI / 2.0 + k * 2.0 * PI / 3.0;
        c + Vec2::new(a.cos(), a.sin()) * SEED_RADIUS
    };

    [corner(0.0), corner(1.0), corner(2.0)]
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            vertices: vec![],
            edges: BTreeSet::new(),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }

    /// The three-vertex seed triangle every construction starts from.
    pub fn seed(bounds: &Bbox) -> Self {
        let mut g = Graph::new();

        for (k, &pos) in seed_positions(bounds).iter().enumerate() {
            g.vertices.push(Vertex {
                id: k as u32 + 1,
                pos,
                color: None,
            });
        }

        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);

        g
    }

    /// Insert the canonical form of edge i-j. Self-loops are ignored.
    pub fn add_edge(&mut self, i: usize, j: usize) -> bool {
        if i == j {
            return false;
        }

        debug_assert!(i < self.vertices.len() && j < self.vertices.len());
        self.edges.insert(edge_key(i, j))
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.edges.contains(&edge_key(i, j))
    }

    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter_map(|&(a, b)| {
                if a == i {
                    Some(b)
                } else if b == i {
                    Some(a)
                } else {
                    None
                }
            })
            .collect()
    }

    /// The next never-used vertex id.
    pub fn next_id(&self) -> u32 {
        self.vertices.iter().map(|v| v.id).max().map_or(1, |m| m + 1)
    }

    pub fn pos(&self, i: usize) -> Vec2 {
        self.vertices[i].pos
    }

    pub fn centroid(&self) -> Vec2 {
        let pts: Vec<Vec2> = self.vertices.iter().map(|v| v.pos).collect();
        crate::geo::centroid(&pts)
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::geo::Vec2;
use crate::graph::{edge_key, Graph, GraphError, Vertex, DEFAULT_PALETTE};

#[derive(Debug, Serialize, Deserialize)]
struct SavedGraph {
    vertices: Vec<SavedVertex>,
    edges: Vec<(usize, usize)>,
    #[serde(default = "default_palette")]
    colors: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SavedVertex {
    id: u32,
    #[serde(default)]
    color: Option<u32>,
    pos: SavedPos,
}

#[derive(Debug, Serialize, Deserialize)]
struct SavedPos {
    x: f64,
    y: f64,
}

fn default_palette() -> Vec<u32> {
    DEFAULT_PALETTE.to_vec()
}

impl Graph {
    pub fn to_json(&self) -> String {
        let saved = SavedGraph {
            vertices: self
                .vertices
                .iter()
                .map(|v| SavedVertex {
                    id: v.id,
                    color: v.color,
                    pos: SavedPos {
                        x: v.pos.x,
                        y: v.pos.y,
                    },
                })
                .collect(),
            edges: self.edges.iter().copied().collect(),
            colors: self.palette.clone(),
        };

        serde_json::to_string_pretty(&saved).expect("a graph value always serializes")
    }

    /// Rebuild a graph from its serialized form. Missing or ill-typed
    /// `vertices`/`edges` abort the load; a missing palette falls back to
    /// the default one.
    pub fn from_json(data: &str) -> Result<Graph, GraphError> {
        let saved: SavedGraph =
            serde_json::from_str(data).map_err(|e| GraphError::MalformedImport(e.to_string()))?;

        let n = saved.vertices.len();
        let mut edges = BTreeSet::new();
        for (i, j) in saved.edges {
            if i == j || i >= n || j >= n {
                return Err(GraphError::MalformedImport(format!(
                    "edge ({}, {}) does not reference two distinct vertices",
                    i, j
                )));
            }
            edges.insert(edge_key(i, j));
        }

        let palette = if saved.colors.is_empty() {
            default_palette()
        } else {
            saved.colors
        };

        Ok(Graph {
            vertices: saved
                .vertices
                .into_iter()
                .map(|v| Vertex {
                    id: v.id,
                    pos: Vec2::new(v.pos.x, v.pos.y),
                    color: v.color,
                })
                .collect(),
            edges,
            palette,
        })
    }
}

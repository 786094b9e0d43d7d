use crate::graph::{Graph, GraphError};

impl Graph {
    /// Assign the lowest palette index not used by any colored neighbor.
    ///
    /// An already-colored vertex is left alone. When every palette entry is
    /// taken among the neighbors the vertex gets index 1 anyway: with the
    /// default 4-color palette that can break proper coloring on
    /// high-degree vertices, and the visual tool accepts that.
    pub fn color_vertex(&self, index: usize) -> Result<Graph, GraphError> {
        if self.vertices.len() < 3 {
            return Err(GraphError::InsufficientVertices);
        }

        let mut g = self.clone();
        if g.vertices[index].color.is_some() {
            return Ok(g);
        }

        let taken: Vec<u32> = g
            .neighbors(index)
            .into_iter()
            .filter_map(|n| g.vertices[n].color)
            .collect();

        let palette_len = g.palette.len() as u32;
        let pick = (1..=palette_len).find(|c| !taken.contains(c)).unwrap_or(1);

        g.vertices[index].color = Some(pick);
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geo::Vec2;
    use crate::graph::Vertex;

    fn star(neighbor_colors: &[Option<u32>]) -> Graph {
        let mut g = Graph::new();
        g.vertices.push(Vertex {
            id: 1,
            pos: Vec2::zero(),
            color: None,
        });

        for (k, &color) in neighbor_colors.iter().enumerate() {
            let a = k as f64;
            g.vertices.push(Vertex {
                id: k as u32 + 2,
                pos: Vec2::new(a.cos() * 50.0, a.sin() * 50.0),
                color,
            });
            g.add_edge(0, k + 1);
        }

        g
    }

    #[test]
    fn picks_the_lowest_free_color() {
        let g = star(&[Some(1), Some(2), None]);
        let colored = g.color_vertex(0).unwrap();

        assert_eq!(colored.vertices[0].color, Some(3));
    }

    #[test]
    fn skips_gaps_left_by_neighbors() {
        let g = star(&[Some(1), Some(3)]);
        let colored = g.color_vertex(0).unwrap();

        assert_eq!(colored.vertices[0].color, Some(2));
    }

    #[test]
    fn exhausted_palette_falls_back_to_one() {
        // four neighbors hold all four palette colors; the fallback is
        // color 1 even though a neighbor already uses it
        let g = star(&[Some(1), Some(2), Some(3), Some(4)]);
        let colored = g.color_vertex(0).unwrap();

        assert_eq!(colored.vertices[0].color, Some(1));
    }

    #[test]
    fn already_colored_vertex_is_untouched() {
        let mut g = star(&[Some(1), Some(2)]);
        g.vertices[0].color = Some(4);

        let colored = g.color_vertex(0).unwrap();
        assert_eq!(colored, g);
    }

    #[test]
    fn coloring_needs_a_seed() {
        let g = Graph::new();
        assert_eq!(g.color_vertex(0), Err(GraphError::InsufficientVertices));
    }
}

use log::warn;

use crate::graph::Graph;

impl Graph {
    /// Ordered vertex indices of the outer boundary face, in a consistent
    /// rotational direction.
    ///
    /// The walk assumes a graph grown by this engine (planar, connected,
    /// seeded from a triangle). For arbitrary imported edge sets it is best
    /// effort only: crossing edges or multiple components can cut the walk
    /// short.
    pub fn periphery(&self) -> Vec<usize> {
        let n = self.vertices.len();
        if n < 3 {
            return vec![];
        }
        if n == 3 {
            return vec![0, 1, 2];
        }

        // The leftmost vertex is provably on the boundary.
        let start = (0..n)
            .min_by(|&a, &b| {
                let (pa, pb) = (self.pos(a), self.pos(b));
                (pa.x, pa.y).partial_cmp(&(pb.x, pb.y)).unwrap()
            })
            .unwrap();

        let first = match self.angular_neighbors(start).first() {
            Some(&v) => v,
            None => {
                warn!("periphery walk started on an isolated vertex");
                return vec![start];
            }
        };

        // Every step leaves along the angular successor of the edge we
        // arrived on, which keeps the walk hugging the outer face.
        let mut order = vec![start];
        let mut prev = start;
        let mut current = first;

        while current != start {
            if order.len() == n {
                warn!("periphery walk did not close, input is likely malformed");
                break;
            }

            order.push(current);

            let nbrs = self.angular_neighbors(current);
            let arrived = nbrs.iter().position(|&w| w == prev).unwrap();
            let next = nbrs[(arrived + 1) % nbrs.len()];

            prev = current;
            current = next;
        }

        order
    }

    fn angular_neighbors(&self, v: usize) -> Vec<usize> {
        let origin = self.pos(v);
        let mut nbrs = self.neighbors(v);

        nbrs.sort_by(|&a, &b| {
            let (ta, tb) = ((self.pos(a) - origin).angle(), (self.pos(b) - origin).angle());
            ta.partial_cmp(&tb).unwrap()
        });

        nbrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geo::Vec2;
    use crate::graph::Vertex;

    fn vertex(id: u32, x: f64, y: f64) -> Vertex {
        Vertex {
            id,
            pos: Vec2::new(x, y),
            color: None,
        }
    }

    #[test]
    fn too_small_graphs_have_no_periphery() {
        let mut g = Graph::new();
        assert!(g.periphery().is_empty());

        g.vertices.push(vertex(1, 0.0, 0.0));
        g.vertices.push(vertex(2, 10.0, 0.0));
        g.add_edge(0, 1);
        assert!(g.periphery().is_empty());
    }

    #[test]
    fn seed_triangle_is_fully_exposed() {
        let mut g = Graph::new();
        g.vertices.push(vertex(1, 0.0, 0.0));
        g.vertices.push(vertex(2, 10.0, 0.0));
        g.vertices.push(vertex(3, 5.0, 8.0));
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);

        assert_eq!(g.periphery(), vec![0, 1, 2]);
    }

    #[test]
    fn walk_follows_the_outer_square() {
        // Square with one diagonal; all four corners are on the boundary.
        let mut g = Graph::new();
        g.vertices.push(vertex(1, 0.0, 0.0));
        g.vertices.push(vertex(2, 10.0, 0.0));
        g.vertices.push(vertex(3, 10.0, 10.0));
        g.vertices.push(vertex(4, 0.0, 10.0));
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(3, 0);
        g.add_edge(0, 2);

        assert_eq!(g.periphery(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn interior_vertex_is_skipped() {
        // Triangle with a fully wired center vertex.
        let mut g = Graph::new();
        g.vertices.push(vertex(1, 0.0, 0.0));
        g.vertices.push(vertex(2, 10.0, 0.0));
        g.vertices.push(vertex(3, 5.0, 10.0));
        g.vertices.push(vertex(4, 5.0, 3.0));
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        g.add_edge(0, 3);
        g.add_edge(1, 3);
        g.add_edge(2, 3);

        let peri = g.periphery();
        assert_eq!(peri.len(), 3);
        assert!(!peri.contains(&3));
    }
}

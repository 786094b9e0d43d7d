use std::env;
use std::fs::File;
use std::io;
use std::io::BufWriter;

use rand::prelude::*;

use natural_graph::geo::{Bbox, Vec2};
use natural_graph::svg::{dump_svg, Labels};
use natural_graph::Graph;

pub fn main() -> io::Result<()> {
    let mut rng = thread_rng();

    let mut bbox = Bbox::new(Vec2::zero());
    bbox.expand(Vec2::new(800.0, 800.0));

    let nvertices = env::args()
        .skip(1)
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(40);

    let mut graph = Graph::seed(&bbox);

    for i in 0..nvertices {
        // don't spam too much
        if nvertices <= 100 {
            let mut out = BufWriter::new(File::create(format!("growth-{}.svg", i))?);
            dump_svg(&mut out, &graph, Labels::Id)?;
        }

        graph = match graph.insert_random(&bbox, &mut rng) {
            Ok(g) => g,
            Err(err) => {
                eprintln!("stopping after {} insertions: {}", i, err);
                break;
            }
        };

        let last = graph.vertices.len() - 1;
        graph = graph.color_vertex(last).expect("graph is seeded");
    }

    let mut out = BufWriter::new(File::create("growth.svg")?);
    dump_svg(&mut out, &graph, Labels::Color)?;

    Ok(())
}

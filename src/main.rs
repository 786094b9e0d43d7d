use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use rand::SeedableRng;
use rand_pcg::Pcg64;
use structopt::StructOpt;

use natural_graph::geo::{Bbox, Vec2};
use natural_graph::segment;
use natural_graph::svg::{dump_svg, Labels};
use natural_graph::{Graph, GraphError};

/// Grow, color and lay out naturally constructed planar graphs.
#[derive(Debug, StructOpt)]
#[structopt(name = "growgraph")]
struct Opt {
    /// How many random vertices to grow on top of the seed triangle
    #[structopt(short = "n", long = "grow", default_value = "40")]
    grow: usize,

    /// Canvas width
    #[structopt(long = "width", default_value = "800")]
    width: f64,

    /// Canvas height
    #[structopt(long = "height", default_value = "800")]
    height: f64,

    /// RNG seed for reproducible growth
    #[structopt(long = "seed")]
    seed: Option<u64>,

    /// Attach a vertex to an explicit periphery selection ("2-4" or
    /// "7,8,1", 1-based periphery ranks) before growing; repeatable
    #[structopt(long = "attach")]
    attach: Vec<String>,

    /// Load a saved graph instead of seeding a fresh triangle
    #[structopt(long = "load", parse(from_os_str))]
    load: Option<PathBuf>,

    /// Recompute every vertex position before writing any output
    #[structopt(long = "relayout")]
    relayout: bool,

    /// Where to save the grown graph as JSON
    #[structopt(long = "save", parse(from_os_str))]
    save: Option<PathBuf>,

    /// Where to dump an SVG snapshot of the drawing
    #[structopt(long = "svg", parse(from_os_str))]
    svg: Option<PathBuf>,

    /// Label vertices with "id" or "color" in the SVG
    #[structopt(long = "labels", default_value = "id")]
    labels: String,
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();
    if let Err(err) = run(&opt) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<(), Box<dyn std::error::Error>> {
    let mut bounds = Bbox::new(Vec2::zero());
    bounds.expand(Vec2::new(opt.width, opt.height));

    let mut rng = match opt.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    let mut graph = match &opt.load {
        Some(path) => Graph::from_json(&fs::read_to_string(path)?)?,
        None => Graph::seed(&bounds),
    };

    for selection in &opt.attach {
        let periphery = graph.periphery();
        let positions = segment::parse_selection(selection, periphery.len())?;
        let target = segment::segment_vertices(&periphery, &positions);

        graph = graph.insert(&target, &bounds)?;
        let last = graph.vertices.len() - 1;
        graph = graph.color_vertex(last)?;
    }

    for grown in 0..opt.grow {
        graph = match graph.insert_random(&bounds, &mut rng) {
            Ok(g) => g,
            Err(GraphError::NoPlacementFound) => {
                log::warn!("canvas exhausted after {} insertions", grown);
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let last = graph.vertices.len() - 1;
        graph = graph.color_vertex(last)?;
    }

    if opt.relayout {
        graph = graph.relayout(&bounds, &mut rng)?;
    }

    if let Some(path) = &opt.save {
        fs::write(path, graph.to_json())?;
    }

    if let Some(path) = &opt.svg {
        let labels = match opt.labels.as_str() {
            "color" => Labels::Color,
            _ => Labels::Id,
        };

        let mut out = BufWriter::new(File::create(path)?);
        dump_svg(&mut out, &graph, labels)?;
    }

    println!(
        "{} vertices, {} edges, periphery of {}",
        graph.vertices.len(),
        graph.edges.len(),
        graph.periphery().len()
    );

    Ok(())
}

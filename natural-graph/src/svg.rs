use std::io;
use std::io::Write;

use crate::geo::Bbox;
use crate::graph::Graph;

/// What to print inside each vertex circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Labels {
    Id,
    Color,
}

const VERTEX_RADIUS: f64 = 12.0;
const PADDING: f64 = 30.0;

const PALETTE_FILLS: [&str; 4] = ["#e6194b", "#3cb44b", "#4363d8", "#ffe119"];
const UNCOLORED_FILL: &str = "#bbbbbb";

/// Write the current drawing as a standalone SVG document.
pub fn dump_svg(w: &mut impl Write, graph: &Graph, labels: Labels) -> io::Result<()> {
    let bbox = drawing_bbox(graph);
    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bbox.min().x,
        bbox.min().y,
        bbox.width(),
        bbox.height()
    )?;

    for &(i, j) in &graph.edges {
        let (a, b) = (graph.pos(i), graph.pos(j));
        writeln!(
            w,
            r##"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#444444" stroke-width="2" />"##,
            a.x, a.y, b.x, b.y
        )?;
    }

    for v in &graph.vertices {
        let fill = v
            .color
            .and_then(|c| (c as usize).checked_sub(1))
            .and_then(|k| PALETTE_FILLS.get(k))
            .unwrap_or(&UNCOLORED_FILL);

        writeln!(
            w,
            r##"  <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="#222222" />"##,
            v.pos.x, v.pos.y, VERTEX_RADIUS, fill
        )?;

        let text = match labels {
            Labels::Id => v.id.to_string(),
            Labels::Color => v.color.map_or_else(|| "-".to_string(), |c| c.to_string()),
        };
        writeln!(
            w,
            r#"  <text x="{}" y="{}" font-size="11" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            v.pos.x, v.pos.y, text
        )?;
    }

    writeln!(w, "</svg>")
}

fn drawing_bbox(graph: &Graph) -> Bbox {
    let mut vertices = graph.vertices.iter();

    let mut bbox = match vertices.next() {
        Some(v) => Bbox::new(v.pos),
        None => {
            let mut b = Bbox::new(crate::geo::Vec2::zero());
            b.expand(crate::geo::Vec2::new(100.0, 100.0));
            return b;
        }
    };
    for v in vertices {
        bbox.expand(v.pos);
    }

    bbox.expand(bbox.min() - crate::geo::Vec2::new(PADDING, PADDING));
    bbox.expand(bbox.max() + crate::geo::Vec2::new(PADDING, PADDING));
    bbox
}

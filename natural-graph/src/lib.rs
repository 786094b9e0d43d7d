//! Engine for "naturally constructed" planar triangulated graphs: a graph
//! grows one vertex at a time, each new vertex attached to a fully
//! connected consecutive run of the outer periphery, and the drawing never
//! gains a crossing. Everything here is a pure transformation over an
//! explicit [`Graph`] value; the interactive shell owns the current value
//! and threads it through successive calls.

mod color;
mod insert;
mod io;
mod layout;
mod periphery;
mod place;

pub mod geo;
pub mod graph;
pub mod segment;
pub mod svg;

pub use crate::geo::{Bbox, Vec2};
pub use crate::graph::{Graph, GraphError, Vertex};

pub mod error;

mod graph;

pub use error::NoSuchEdge;
pub use graph::{Digraph, Vertex};

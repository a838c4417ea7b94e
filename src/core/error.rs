use thiserror::Error;

use super::Vertex;

/// The edge between the given endpoints does not exist.
///
/// Returned by weight lookups. Callers that want to treat a missing edge as
/// "no weight" can check [`has_edge`](super::Digraph::has_edge) first or match
/// on the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("edge {from} -> {to} does not exist")]
pub struct NoSuchEdge {
    pub from: Vertex,
    pub to: Vertex,
}

impl NoSuchEdge {
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Self { from, to }
    }
}

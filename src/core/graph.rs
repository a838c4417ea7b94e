use crate::visit::{self, PredecessorMap};

use super::NoSuchEdge;

/// Vertex identifier. Vertices are plain non-negative integers; what range of
/// them is valid is determined by the storage backend.
pub type Vertex = usize;

/// The contract implemented by every directed graph storage backend.
///
/// A graph holds at most one directed edge per ordered pair of vertices, with
/// a weight of type `W` attached to each edge. Edge existence and edge weight
/// live in separate structures inside a backend; the mutating methods of this
/// trait are the only way to touch them, which keeps the two synchronized at
/// all times.
///
/// # Examples
///
/// ```
/// use flowgraph::{core::Digraph, storage::AdjList};
///
/// let mut graph = AdjList::new();
///
/// graph.add_edge(0, 1, 3);
/// graph.add_edge(1, 2, 5);
///
/// assert!(graph.has_edge(0, 1));
/// assert_eq!(graph.weight(1, 2), Ok(&5));
///
/// let mut visited = Vec::new();
/// graph.bfs(0, |vertex, _| visited.push(vertex));
/// assert_eq!(visited, vec![0, 1, 2]);
/// ```
pub trait Digraph<W>: Clone {
    /// Inserts the directed edge `from -> to`, overwriting the weight if the
    /// edge already exists.
    fn add_edge(&mut self, from: Vertex, to: Vertex, weight: W);

    /// Removes the edge `from -> to` and returns true iff it existed before
    /// the call. Removing a non-existent edge is a no-op, not an error.
    fn remove_edge(&mut self, from: Vertex, to: Vertex) -> bool;

    /// Checks the existence of the edge `from -> to`. Does not allocate.
    fn has_edge(&self, from: Vertex, to: Vertex) -> bool;

    /// Returns the weight of the edge `from -> to`, or [`NoSuchEdge`] if the
    /// edge does not exist. Never falls back to a default weight.
    fn weight(&self, from: Vertex, to: Vertex) -> Result<&W, NoSuchEdge>;

    /// Returns the vertex set in ascending order.
    ///
    /// The exact membership is backend-specific. The adjacency matrix reports
    /// the full fixed range regardless of edge presence, while the adjacency
    /// list reports only vertices that have been the *source* of an edge at
    /// some point. See the backend documentation for details.
    fn vertices(&self) -> Vec<Vertex>;

    /// Returns the immediate successors of `vertex`, empty for a vertex
    /// without outgoing edges. The order is deterministic per backend.
    ///
    /// This is a read-only operation: asking about an unknown vertex does not
    /// register it in the vertex set.
    fn out(&self, vertex: Vertex) -> Vec<Vertex>;

    /// Creates a deep structural copy of the graph with every weight replaced
    /// by `transform` applied to the original.
    ///
    /// The copy has identical vertex and edge existence and independently
    /// owned storage, so mutating it never affects the original. A plain
    /// structural copy without the transform is [`Clone::clone`].
    fn map_weights<F>(&self, transform: F) -> Self
    where
        F: FnMut(&W) -> W;

    /// Traverses the graph from `start` in breadth-first order, calling
    /// `visit` for every reachable vertex exactly once.
    ///
    /// Along with the vertex, `visit` receives the predecessor map
    /// accumulated so far: for every discovered vertex other than `start` it
    /// records the vertex from which it was discovered *first*; later
    /// discoveries along other paths never overwrite the entry. `start` is
    /// visited even when it has no outgoing edges.
    fn bfs<F>(&self, start: Vertex, visit: F)
    where
        F: FnMut(Vertex, &PredecessorMap),
    {
        visit::bfs(self, start, visit)
    }

    /// Traverses the graph from `start` in pre-order depth-first order,
    /// calling `visit` for every reachable vertex exactly once.
    ///
    /// The implementation is iterative but visits vertices in the same order
    /// as the recursive formulation would, following the successor order of
    /// [`out`](Digraph::out).
    fn dfs<F>(&self, start: Vertex, visit: F)
    where
        F: FnMut(Vertex),
    {
        visit::dfs(self, start, visit)
    }
}

use rustc_hash::FxHashMap;

use crate::core::{Digraph, NoSuchEdge, Vertex};

/// Sparse adjacency list storage without a fixed size.
///
/// Any `usize` is a valid vertex. The vertex set is implicit: a vertex
/// becomes a member the first time it is used as the *source* of
/// [`add_edge`](Digraph::add_edge) and stays a member afterwards. A vertex
/// that only ever appears as an edge destination is not reported by
/// [`vertices`](Digraph::vertices), even though edges leading to it exist.
/// This asymmetry is intentional and relied upon by callers; see the method
/// documentation.
///
/// Successors of a vertex enumerate in the order in which the edges were
/// first inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjList<W> {
    // Edge existence lives in the successor lists, edge weights in the map.
    // Every mutation updates both within a single call.
    succ: FxHashMap<Vertex, Vec<Vertex>>,
    weights: FxHashMap<(Vertex, Vertex), W>,
}

impl<W> AdjList<W> {
    pub fn new() -> Self {
        Self {
            succ: FxHashMap::default(),
            weights: FxHashMap::default(),
        }
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }
}

impl<W> Default for AdjList<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Clone> Digraph<W> for AdjList<W> {
    fn add_edge(&mut self, from: Vertex, to: Vertex, weight: W) {
        let succ = self.succ.entry(from).or_default();

        if !succ.contains(&to) {
            succ.push(to);
        }

        self.weights.insert((from, to), weight);
    }

    fn remove_edge(&mut self, from: Vertex, to: Vertex) -> bool {
        let Some(succ) = self.succ.get_mut(&from) else {
            return false;
        };

        let Some(position) = succ.iter().position(|&vertex| vertex == to) else {
            return false;
        };

        // Keep the remaining successors in insertion order. The source stays
        // in the vertex set even if this was its last outgoing edge.
        succ.remove(position);
        self.weights.remove(&(from, to));

        true
    }

    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.succ
            .get(&from)
            .map_or(false, |succ| succ.contains(&to))
    }

    fn weight(&self, from: Vertex, to: Vertex) -> Result<&W, NoSuchEdge> {
        self.weights
            .get(&(from, to))
            .ok_or(NoSuchEdge::new(from, to))
    }

    fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = self.succ.keys().copied().collect::<Vec<_>>();
        vertices.sort_unstable();
        vertices
    }

    fn out(&self, vertex: Vertex) -> Vec<Vertex> {
        // A plain lookup, not `entry`, so that asking about an unknown vertex
        // does not register it in the vertex set.
        self.succ.get(&vertex).cloned().unwrap_or_default()
    }

    fn map_weights<F>(&self, mut transform: F) -> Self
    where
        F: FnMut(&W) -> W,
    {
        Self {
            succ: self.succ.clone(),
            weights: self
                .weights
                .iter()
                .map(|(&edge, weight)| (edge, transform(weight)))
                .collect(),
        }
    }
}

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;

use crate::core::{Digraph, NoSuchEdge, Vertex};

/// Dense adjacency matrix storage over a fixed vertex range `[0, n)`.
///
/// The vertex count is chosen at construction and never changes; the vertex
/// set is exactly `[0, n)` regardless of edge presence. Accessing a vertex
/// outside the range is a programmer error and panics instead of silently
/// wrapping around or no-oping.
///
/// Successors of a vertex enumerate in ascending index order.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjMatrix<W> {
    // Row-major n*n bit matrix holding edge existence; edge weights live in
    // the map. Every mutation updates both within a single call.
    matrix: FixedBitSet,
    weights: FxHashMap<(Vertex, Vertex), W>,
    n: usize,
}

impl<W> AdjMatrix<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            matrix: FixedBitSet::with_capacity(vertex_count * vertex_count),
            weights: FxHashMap::default(),
            n: vertex_count,
        }
    }

    /// The fixed vertex count `n` chosen at construction.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    fn index(&self, row: Vertex, col: Vertex) -> usize {
        assert!(row < self.n, "vertex {row} out of range 0..{}", self.n);
        assert!(col < self.n, "vertex {col} out of range 0..{}", self.n);

        row * self.n + col
    }
}

impl<W: Clone> Digraph<W> for AdjMatrix<W> {
    fn add_edge(&mut self, from: Vertex, to: Vertex, weight: W) {
        let index = self.index(from, to);

        self.matrix.insert(index);
        self.weights.insert((from, to), weight);
    }

    fn remove_edge(&mut self, from: Vertex, to: Vertex) -> bool {
        let index = self.index(from, to);

        if !self.matrix.contains(index) {
            return false;
        }

        self.matrix.set(index, false);
        self.weights.remove(&(from, to));

        true
    }

    fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.matrix.contains(self.index(from, to))
    }

    fn weight(&self, from: Vertex, to: Vertex) -> Result<&W, NoSuchEdge> {
        if !self.matrix.contains(self.index(from, to)) {
            return Err(NoSuchEdge::new(from, to));
        }

        // The bit is set, so the weight entry exists.
        Ok(&self.weights[&(from, to)])
    }

    fn vertices(&self) -> Vec<Vertex> {
        (0..self.n).collect()
    }

    fn out(&self, vertex: Vertex) -> Vec<Vertex> {
        let row = self.index(vertex, 0);

        (0..self.n)
            .filter(|to| self.matrix.contains(row + to))
            .collect()
    }

    fn map_weights<F>(&self, mut transform: F) -> Self
    where
        F: FnMut(&W) -> W,
    {
        Self {
            matrix: self.matrix.clone(),
            weights: self
                .weights
                .iter()
                .map(|(&edge, weight)| (edge, transform(weight)))
                .collect(),
            n: self.n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_set_is_full_range() {
        let graph = AdjMatrix::<i32>::new(4);

        assert_eq!(graph.vertices(), vec![0, 1, 2, 3]);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn out_in_ascending_order() {
        let mut graph = AdjMatrix::new(5);

        graph.add_edge(2, 4, 1);
        graph.add_edge(2, 0, 1);
        graph.add_edge(2, 3, 1);

        assert_eq!(graph.out(2), vec![0, 3, 4]);
    }

    #[test]
    fn copy_preserves_dimensions() {
        let mut graph = AdjMatrix::new(3);
        graph.add_edge(0, 2, 1);

        let copy = graph.map_weights(|&weight| weight);

        assert_eq!(copy.vertex_count(), 3);
        assert_eq!(copy.vertices(), graph.vertices());
        assert!(copy.has_edge(0, 2));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn add_edge_out_of_range() {
        let mut graph = AdjMatrix::new(3);
        graph.add_edge(0, 3, 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn lookup_out_of_range() {
        let graph = AdjMatrix::<i32>::new(3);
        graph.has_edge(3, 0);
    }
}

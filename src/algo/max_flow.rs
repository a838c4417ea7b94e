//! Maximum flow in a capacity network using the
//! [Edmonds–Karp](https://en.wikipedia.org/wiki/Edmonds%E2%80%93Karp_algorithm)
//! variant of the augmenting path method: the next path is always a shortest
//! (fewest-hop) path in the residual graph, found by BFS.
//!
//! # Examples
//!
//! ```
//! use flowgraph::{algo::FlowNetwork, core::Digraph, storage::AdjList};
//!
//! let mut graph = AdjList::new();
//!
//! graph.add_edge(0, 1, 10);
//! graph.add_edge(0, 2, 10);
//! graph.add_edge(1, 3, 10);
//! graph.add_edge(2, 3, 10);
//!
//! let mut network = FlowNetwork::new(&graph);
//! assert_eq!(network.max_flow(0, 3), Ok(20));
//! ```

use num_traits::{NumAssign, PrimInt};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{Digraph, NoSuchEdge, Vertex};

/// The error encountered when seeding or solving a [`FlowNetwork`].
///
/// All variants are raised before any mutation of the network takes place, so
/// a failed call leaves the flow assignment untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Total inflow and total outflow disagree at a vertex that is neither
    /// the source nor the sink.
    #[error("flow is not conserved at vertex {0}")]
    NotConserved(Vertex),

    /// Total outflow of the source differs from total inflow of the sink.
    // The raw identifier spells the same field name but keeps thiserror from
    // treating it as an error-source field (`Vertex` is not an `Error`).
    #[error("outflow of source {source} differs from inflow of sink {sink}")]
    Unbalanced { r#source: Vertex, sink: Vertex },

    /// An edge carries negative flow.
    #[error("negative flow on edge {from} -> {to}")]
    NegativeFlow { from: Vertex, to: Vertex },

    /// An edge carries more flow than its capacity allows.
    #[error("flow exceeds capacity on edge {from} -> {to}")]
    ExceedsCapacity { from: Vertex, to: Vertex },

    /// Flow was assigned to an edge that does not exist in the capacity
    /// graph.
    #[error("{0}")]
    NoSuchEdge(#[from] NoSuchEdge),
}

/// A flow network over an immutable capacity graph.
///
/// The wrapped graph provides the edges and their capacities (edge weights)
/// and is never mutated; the network tracks the flow assigned to each edge
/// separately, with untouched edges carrying zero flow. A network can be
/// seeded with a partial flow via [`set_flow`](FlowNetwork::set_flow) before
/// solving, e.g. to resume a partially flowed network.
///
/// All operations are synchronous and single-threaded; the residual graph
/// built during [`max_flow`](FlowNetwork::max_flow) is owned by that call and
/// discarded when it returns.
#[derive(Debug, Clone)]
pub struct FlowNetwork<'a, G, W> {
    graph: &'a G,
    flow: FxHashMap<(Vertex, Vertex), W>,
}

impl<'a, G, W> FlowNetwork<'a, G, W>
where
    G: Digraph<W>,
    W: PrimInt + NumAssign,
{
    /// Creates a network over the given capacity graph with all-zero flow.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            flow: FxHashMap::default(),
        }
    }

    /// Current flow on the given edge, zero if none has been assigned.
    pub fn flow(&self, from: Vertex, to: Vertex) -> W {
        self.flow.get(&(from, to)).copied().unwrap_or_else(W::zero)
    }

    /// Assigns flow to an edge of the capacity graph.
    ///
    /// The edge must exist and the value must satisfy
    /// `0 <= value <= capacity`. These checks establish the per-edge
    /// invariants that [`max_flow`](FlowNetwork::max_flow) relies on, so the
    /// solver only re-validates conservation.
    pub fn set_flow(&mut self, from: Vertex, to: Vertex, value: W) -> Result<(), FlowError> {
        let capacity = *self.graph.weight(from, to)?;

        if value < W::zero() {
            return Err(FlowError::NegativeFlow { from, to });
        }

        if value > capacity {
            return Err(FlowError::ExceedsCapacity { from, to });
        }

        self.flow.insert((from, to), value);
        Ok(())
    }

    /// Computes a maximum flow from `source` to `sink` and returns its total
    /// value.
    ///
    /// The current flow assignment must be valid: conserved at every vertex
    /// other than `source` and `sink`, with the total outflow of `source`
    /// equal to the total inflow of `sink`. An invalid assignment is a hard
    /// error raised before any mutation.
    ///
    /// On success the flow mapping reflects a maximum flow consistent with
    /// the capacities; the capacity graph itself is never touched. Solving an
    /// already maximum network again finds no augmenting path and returns the
    /// same total.
    ///
    /// When the capacity graph contains a pair of antiparallel edges
    /// (`u -> v` and `v -> u`) that both carry flow, the per-edge values in
    /// the mapping are *gross*: an augmentation over the shared residual may
    /// record more flow on one edge of the pair than its own capacity, with
    /// the surplus cancelled by the opposite edge. The net flow between two
    /// such vertices is the difference of the two values; totals,
    /// conservation and the returned maximum are unaffected.
    pub fn max_flow(&mut self, source: Vertex, sink: Vertex) -> Result<W, FlowError> {
        self.validate(source, sink)?;

        let mut residual = self.residual_graph()?;

        while let Some(path) = augmenting_path(&residual, source, sink) {
            // A degenerate path with fewer than two vertices has no edges and
            // therefore zero bottleneck; pushing along it cannot make
            // progress.
            if path.len() < 2 {
                break;
            }

            let mut bottleneck = W::max_value();
            for pair in path.windows(2) {
                bottleneck = bottleneck.min(*residual.weight(pair[0], pair[1])?);
            }

            // Update the declared flows.
            for pair in path.windows(2) {
                let (from, to) = (pair[0], pair[1]);

                if self.graph.has_edge(from, to) {
                    let updated = self.flow(from, to) + bottleneck;
                    self.flow.insert((from, to), updated);
                } else {
                    // The path goes against an edge of the capacity graph,
                    // cancelling a part of the flow already pushed through
                    // it.
                    let updated = self.flow(to, from) - bottleneck;
                    self.flow.insert((to, from), updated);
                }
            }

            // Repair the residual graph along the path.
            for pair in path.windows(2) {
                let (from, to) = (pair[0], pair[1]);
                let current = *residual.weight(from, to)?;

                if current == bottleneck {
                    // Saturated; no residual capacity remains.
                    residual.remove_edge(from, to);
                } else {
                    residual.add_edge(from, to, current - bottleneck);
                }

                let backward = match residual.weight(to, from) {
                    Ok(&existing) => existing + bottleneck,
                    Err(NoSuchEdge { .. }) => bottleneck,
                };
                residual.add_edge(to, from, backward);
            }
        }

        let mut total = W::zero();
        for to in self.graph.out(source) {
            total += self.flow(source, to);
        }

        Ok(total)
    }

    fn validate(&self, source: Vertex, sink: Vertex) -> Result<(), FlowError> {
        let zero = W::zero();

        let mut inflow: FxHashMap<Vertex, W> = FxHashMap::default();
        let mut outflow: FxHashMap<Vertex, W> = FxHashMap::default();

        for (&(from, to), &value) in &self.flow {
            if value < zero {
                return Err(FlowError::NegativeFlow { from, to });
            }

            *outflow.entry(from).or_insert(zero) += value;
            *inflow.entry(to).or_insert(zero) += value;
        }

        let mut touched: Vec<Vertex> = inflow.keys().chain(outflow.keys()).copied().collect();
        touched.sort_unstable();
        touched.dedup();

        for vertex in touched {
            if vertex == source || vertex == sink {
                continue;
            }

            let incoming = inflow.get(&vertex).copied().unwrap_or(zero);
            let outgoing = outflow.get(&vertex).copied().unwrap_or(zero);

            if incoming != outgoing {
                return Err(FlowError::NotConserved(vertex));
            }
        }

        let source_out = outflow.get(&source).copied().unwrap_or(zero);
        let sink_in = inflow.get(&sink).copied().unwrap_or(zero);

        if source_out != sink_in {
            return Err(FlowError::Unbalanced { source, sink });
        }

        Ok(())
    }

    // Builds the residual graph for the current flow assignment: a structural
    // copy of the capacity graph where every flowed edge keeps its remaining
    // forward capacity and gains a backward edge worth the cancellable flow.
    fn residual_graph(&self) -> Result<G, FlowError> {
        let mut residual = self.graph.map_weights(|&capacity| capacity);

        // An edge with zero capacity has no residual capacity to begin with;
        // keeping it would let the path search route through it.
        for from in self.graph.vertices() {
            for to in self.graph.out(from) {
                if *self.graph.weight(from, to)? == W::zero() {
                    residual.remove_edge(from, to);
                }
            }
        }

        // Forward residuals first and backward increments second, so that a
        // pair of antiparallel flowed edges is handled the same way no matter
        // in which order the flow map iterates.
        for (&(from, to), &value) in &self.flow {
            if value == W::zero() {
                continue;
            }

            let capacity = *self.graph.weight(from, to)?;

            if value == capacity {
                residual.remove_edge(from, to);
            } else {
                residual.add_edge(from, to, capacity - value);
            }
        }

        for (&(from, to), &value) in &self.flow {
            if value == W::zero() {
                continue;
            }

            let backward = match residual.weight(to, from) {
                Ok(&existing) => existing + value,
                Err(NoSuchEdge { .. }) => value,
            };
            residual.add_edge(to, from, backward);
        }

        Ok(residual)
    }
}

// Shortest augmenting path in the residual graph, reconstructed by walking
// the BFS predecessor map backwards from the sink. None if the sink is
// unreachable.
fn augmenting_path<G, W>(residual: &G, source: Vertex, sink: Vertex) -> Option<Vec<Vertex>>
where
    G: Digraph<W>,
{
    let mut path = None;

    residual.bfs(source, |vertex, pred| {
        if vertex != sink || path.is_some() {
            return;
        }

        let mut vertices = vec![sink];
        let mut current = sink;

        while let Some(&previous) = pred.get(&current) {
            vertices.push(previous);
            current = previous;
        }

        vertices.reverse();
        path = Some(vertices);
    });

    path
}

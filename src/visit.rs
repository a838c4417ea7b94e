//! Implementations of graph traversal methods.
//!
//! Both traversals in this module are **iterative**, that is, they don't use
//! recursion. This means that the traversal is not limited by the size of the
//! program stack, while the depth-first search still reports vertices in the
//! order of the recursive formulation.
//!
//! The order in which the successors of a vertex are discovered follows
//! [`Digraph::out`] and is therefore deterministic per backend.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Digraph, Vertex};

/// Map from a discovered vertex to the vertex it was first discovered from.
///
/// Walking the map backwards from a vertex reconstructs the path on which the
/// traversal reached it, ending at the start vertex (which has no entry).
pub type PredecessorMap = FxHashMap<Vertex, Vertex>;

/// Breadth-first traversal from `start`, in FIFO discovery order.
///
/// See [`Digraph::bfs`] for the semantics of the predecessor map passed to
/// `visit`.
pub fn bfs<W, G, F>(graph: &G, start: Vertex, mut visit: F)
where
    G: Digraph<W>,
    F: FnMut(Vertex, &PredecessorMap),
{
    let mut visited = FxHashSet::default();
    let mut pred = PredecessorMap::default();
    let mut queue = VecDeque::new();

    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        // A vertex can be enqueued multiple times before it is dequeued for
        // the first time. Later occurrences are skipped without visiting.
        if !visited.insert(vertex) {
            continue;
        }

        for next in graph.out(vertex) {
            if visited.contains(&next) {
                continue;
            }

            if next != start {
                // Only the first discovery establishes the predecessor.
                pred.entry(next).or_insert(vertex);
            }

            queue.push_back(next);
        }

        visit(vertex, &pred);
    }
}

/// Pre-order depth-first traversal from `start`.
pub fn dfs<W, G, F>(graph: &G, start: Vertex, mut visit: F)
where
    G: Digraph<W>,
    F: FnMut(Vertex),
{
    let mut visited = FxHashSet::default();
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex) {
            continue;
        }

        visit(vertex);

        // Pushed in reverse so that the first successor is processed first,
        // matching the recursive visitation order.
        for next in graph.out(vertex).into_iter().rev() {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        core::Digraph,
        storage::{AdjList, AdjMatrix},
    };

    fn diamond() -> AdjList<u32> {
        let mut graph = AdjList::new();

        graph.add_edge(0, 1, 1);
        graph.add_edge(0, 2, 1);
        graph.add_edge(1, 3, 1);
        graph.add_edge(2, 3, 1);

        graph
    }

    #[test]
    fn bfs_fifo_order() {
        let graph = diamond();
        let mut order = Vec::new();

        graph.bfs(0, |vertex, _| order.push(vertex));

        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn bfs_first_predecessor_wins() {
        let graph = diamond();
        let mut pred_of_3 = None;

        graph.bfs(0, |vertex, pred| {
            if vertex == 3 {
                pred_of_3 = pred.get(&3).copied();
            }
        });

        // Vertex 1 is dequeued before vertex 2, so it discovers 3 first and
        // the later discovery through 2 must not overwrite the entry.
        assert_eq!(pred_of_3, Some(1));
    }

    #[test]
    fn bfs_cumulative_predecessor_map() {
        let graph = diamond();
        let mut snapshots = Vec::new();

        graph.bfs(0, |vertex, pred| snapshots.push((vertex, pred.len())));

        // The map passed to the callback accumulates over the whole
        // traversal; it is not scoped to the visited vertex.
        assert_eq!(snapshots, vec![(0, 2), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn bfs_start_without_edges() {
        let graph = AdjList::<u32>::new();
        let mut order = Vec::new();

        graph.bfs(5, |vertex, pred| {
            assert!(pred.is_empty());
            order.push(vertex);
        });

        assert_eq!(order, vec![5]);
    }

    #[test]
    fn bfs_never_assigns_predecessor_to_start() {
        let mut graph = diamond();
        // Close the cycle back to the start.
        graph.add_edge(3, 0, 1);

        graph.bfs(0, |_, pred| assert_eq!(pred.get(&0), None));
    }

    #[test]
    fn dfs_preorder() {
        let graph = diamond();
        let mut order = Vec::new();

        graph.dfs(0, |vertex| order.push(vertex));

        // First successor branch is exhausted before the second, as in the
        // recursive formulation.
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn dfs_matrix_ascending_successors() {
        let mut graph = AdjMatrix::new(4);

        graph.add_edge(0, 2, 1);
        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 3, 1);
        graph.add_edge(2, 3, 1);

        let mut order = Vec::new();
        graph.dfs(0, |vertex| order.push(vertex));

        // Matrix successors enumerate in ascending index order regardless of
        // insertion order.
        assert_eq!(order, vec![0, 1, 3, 2]);
    }

    #[test]
    fn dfs_visits_each_vertex_once() {
        let mut graph = diamond();
        graph.add_edge(3, 0, 1);

        let mut order = Vec::new();
        graph.dfs(0, |vertex| order.push(vertex));

        assert_eq!(order, vec![0, 1, 3, 2]);
    }
}

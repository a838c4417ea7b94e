//! Implementations of the [`Digraph`](crate::core::Digraph) storage backends.
//!
//! A _storage_ is an implementation of the directed graph representation. Two
//! structurally different backends are available and behave identically with
//! respect to the contract:
//!
//! * [Adjacency list](adj_list) — sparse storage without a fixed size. The
//!   vertex set is implicit: it consists of the vertices that have appeared
//!   as the source of an edge.
//! * [Adjacency matrix](adj_matrix) — dense storage over a fixed vertex count
//!   `n` chosen at construction. The vertex set is exactly `[0, n)`.
//!
//! |                 | **[AdjList]**  | **[AdjMatrix]** |
//! |-----------------|----------------|-----------------|
//! | add edge        | _O(d)_         | _O(1)_          |
//! | remove edge     | _O(d)_         | _O(1)_          |
//! | edge lookup     | _O(d)_         | _O(1)_          |
//! | out-neighbors   | _O(d)_         | _O(V)_          |
//! | space           | _O(V + E)_     | _O(V²)_         |
//! | vertex range    | any `usize`    | `[0, n)`        |
//!
//! * _V_ – vertex count
//! * _E_ – edge count
//! * _d_ – vertex out-degree
//!
//! Adding a list edge scans the source's successors to keep at most one edge
//! per ordered pair, hence _O(d)_.

pub mod adj_list;
pub mod adj_matrix;

#[doc(inline)]
pub use self::{adj_list::AdjList, adj_matrix::AdjMatrix};

//! Algorithms operating on the [`Digraph`](crate::core::Digraph) contract.
//!
//! The algorithms depend only on the contract, so any storage backend can be
//! used interchangeably.

pub mod max_flow;

#[doc(inline)]
pub use max_flow::{FlowError, FlowNetwork};

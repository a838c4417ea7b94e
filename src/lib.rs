pub mod algo;
pub mod core;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        algo::FlowNetwork,
        core::{Digraph, Vertex},
        storage::{AdjList, AdjMatrix},
    };
}

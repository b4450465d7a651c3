//! Depth-first vertex orders and directed cycle detection for static directed
//! graphs.
//!
//! Both analyses run their traversal eagerly when constructed and only answer
//! queries afterwards:
//!
//! * [`DepthFirstOrder`](algo::DepthFirstOrder) computes preorder, postorder
//!   and reverse postorder of all vertices,
//! * [`DirectedCycle`](algo::DirectedCycle) finds one directed cycle, if
//!   there is any.
//!
//! # Examples
//!
//! ```
//! use digraph_dfs::{
//!     algo::{DepthFirstOrder, DirectedCycle},
//!     storage::AdjList,
//! };
//!
//! let graph = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
//!
//! assert!(!DirectedCycle::new(&graph).has_cycle());
//!
//! let order = DepthFirstOrder::new(&graph);
//! assert_eq!(order.preorder().collect::<Vec<_>>(), vec![0, 1, 3, 2]);
//! assert_eq!(order.reverse_postorder().collect::<Vec<_>>(), vec![0, 2, 1, 3]);
//! ```

pub mod algo;
pub mod core;
pub mod infra;
pub mod io;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::core::{Successors, VertexSet};
}

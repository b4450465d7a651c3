//! Find a [topologically sorted] sequence of vertices of a [directed acyclic
//! graph] (DAG).
//!
//! The order is the reverse postorder of a [depth-first
//! search](super::DepthFirstOrder), after [checking](super::DirectedCycle)
//! that the graph has no directed cycle.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use digraph_dfs::{
//!     algo::toposort::{toposort, Error},
//!     storage::AdjList,
//! };
//!
//! // Edge direction in "must be compiled before" relation.
//! let mut dependencies = AdjList::from_edges(
//!     5,
//!     [(4, 3), (3, 0), (2, 0), (4, 1), (1, 0)],
//! )
//! .unwrap();
//!
//! assert_eq!(toposort(&dependencies), Ok(vec![4, 3, 2, 1, 0]));
//!
//! dependencies.add_edge(0, 4);
//! assert!(matches!(toposort(&dependencies), Err(Error::Cycle(_))));
//! ```

use thiserror::Error;

use crate::core::Successors;

use super::{DepthFirstOrder, DirectedCycle};

/// The error encountered during a [`toposort`] run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order. The cycle is given
    /// as a closed walk as returned by [`DirectedCycle::cycle`].
    #[error("graph contains cycle")]
    Cycle(Vec<usize>),
}

/// Returns the vertices of the graph in a topological order, or a cycle that
/// prevents its existence.
pub fn toposort<G>(graph: &G) -> Result<Vec<usize>, Error>
where
    G: Successors,
{
    if let Some(cycle) = DirectedCycle::new(graph).into_cycle() {
        return Err(Error::Cycle(cycle));
    }

    Ok(DepthFirstOrder::new(graph).reverse_postorder().collect())
}

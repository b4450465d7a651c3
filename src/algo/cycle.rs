//! Find a directed [cycle] in a graph.
//!
//! The detection uses a depth-first search that distinguishes vertices that
//! were already finished from vertices that are still open on the current
//! path. An edge into an open vertex closes a cycle. The search stops at the
//! first such edge, so only one cycle is reported even if there are many.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use digraph_dfs::{
//!     algo::{is_cyclic, DirectedCycle},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge(3, 1);
//!
//! let cycle = DirectedCycle::new(&graph);
//! assert_eq!(cycle.cycle(), Some(&[3, 1, 2, 3][..]));
//! ```

use log::debug;

use crate::{
    core::Successors,
    visit::{DfsEvent, DfsEvents},
};

/// Result of directed cycle detection on a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    /// Searches the graph for a directed cycle.
    pub fn new<G>(graph: &G) -> Self
    where
        G: Successors,
    {
        // Predecessor of each vertex in its depth-first tree.
        let mut edge_to = vec![None; graph.vertex_count()];
        let mut cycle = None;

        for event in DfsEvents::new(graph) {
            match event {
                DfsEvent::Discover { vertex, parent } => edge_to[vertex] = parent,
                DfsEvent::BackEdge { from, to } => {
                    cycle = Some(trace_back(&edge_to, from, to));
                    // Dropping the traversal here leaves the rest of the graph
                    // unexplored.
                    break;
                }
                DfsEvent::CrossEdge { .. } | DfsEvent::Finish { .. } => {}
            }
        }

        match cycle {
            Some(ref cycle) => debug!("found directed cycle {cycle:?}"),
            None => debug!(
                "no directed cycle in graph with {} vertices",
                graph.vertex_count()
            ),
        }

        Self { cycle }
    }

    /// Returns `true` if the graph has a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the found cycle, if any.
    ///
    /// The cycle is a closed walk: the first and the last vertex are the same
    /// and there is an edge between every two consecutive vertices. It starts
    /// with the source of the edge that closed the cycle during the search.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    pub fn into_cycle(self) -> Option<Vec<usize>> {
        self.cycle
    }
}

// For a back edge `from -> to`, `to` is an ancestor of `from` (or `from`
// itself) and following the tree edges backwards from `from` must reach it.
fn trace_back(edge_to: &[Option<usize>], from: usize, to: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = from;

    while current != to {
        path.push(current);
        current = match edge_to[current] {
            Some(parent) => parent,
            None => unreachable!("back edge target is not an ancestor of its source"),
        };
    }

    // Close the walk from both sides and flip it to follow the edge
    // directions.
    path.push(to);
    path.push(from);
    path.reverse();
    path
}

/// Returns `true` if the graph has a directed cycle.
pub fn is_cyclic<G>(graph: &G) -> bool
where
    G: Successors,
{
    DirectedCycle::new(graph).has_cycle()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        infra::{
            proptest::digraph,
            testing::{check_cycle, is_acyclic},
        },
        storage::AdjList,
    };

    use super::*;

    #[test]
    fn cyclic_triangle() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let cycle = DirectedCycle::new(&graph);

        assert!(cycle.has_cycle());
        assert_eq!(cycle.cycle(), Some(&[2, 0, 1, 2][..]));
        check_cycle(&graph, &cycle).unwrap();
    }

    #[test]
    fn acyclic_diamond() {
        let graph = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        let cycle = DirectedCycle::new(&graph);

        assert!(!cycle.has_cycle());
        assert_eq!(cycle.cycle(), None);
        check_cycle(&graph, &cycle).unwrap();
    }

    #[test]
    fn acyclic_weakly_cyclic() {
        // Cycle if the directions are ignored.
        let graph = AdjList::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
        assert!(!is_cyclic(&graph));
    }

    #[test]
    fn self_loop() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 1)]).unwrap();
        let cycle = DirectedCycle::new(&graph);

        assert_eq!(cycle.into_cycle(), Some(vec![1, 1]));
    }

    #[test]
    fn two_cycle() {
        let graph = AdjList::from_edges(2, [(0, 1), (1, 0)]).unwrap();
        assert_eq!(DirectedCycle::new(&graph).into_cycle(), Some(vec![1, 0, 1]));
    }

    #[test]
    fn cycle_not_through_root() {
        let graph =
            AdjList::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 2), (4, 5)]).unwrap();
        let cycle = DirectedCycle::new(&graph);

        assert_eq!(cycle.cycle(), Some(&[4, 2, 3, 4][..]));
        check_cycle(&graph, &cycle).unwrap();
    }

    #[test]
    fn cycle_in_later_component() {
        let graph = AdjList::from_edges(5, [(0, 1), (2, 3), (3, 4), (4, 2)]).unwrap();
        let cycle = DirectedCycle::new(&graph);

        assert_eq!(cycle.cycle(), Some(&[4, 2, 3, 4][..]));
    }

    #[test]
    fn cycle_reached_through_finished_vertices() {
        // Vertex 1 is finished before the cycle 2 -> 3 -> 2 is entered from 0.
        let graph = AdjList::from_edges(4, [(0, 1), (0, 2), (2, 1), (2, 3), (3, 2)]).unwrap();
        let cycle = DirectedCycle::new(&graph);

        assert_eq!(cycle.cycle(), Some(&[3, 2, 3][..]));
    }

    #[test]
    fn first_cycle_only() {
        let graph = AdjList::from_edges(4, [(0, 1), (1, 0), (2, 3), (3, 2)]).unwrap();
        let cycle = DirectedCycle::new(&graph);

        assert_eq!(cycle.cycle(), Some(&[1, 0, 1][..]));
    }

    #[test]
    fn empty_graph() {
        assert!(!is_cyclic(&AdjList::default()));
    }

    #[test]
    fn repeated_queries() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let cycle = DirectedCycle::new(&graph);

        assert_eq!(cycle.cycle(), cycle.cycle());
        assert_eq!(cycle.has_cycle(), cycle.has_cycle());
        assert_eq!(cycle, DirectedCycle::new(&graph));
    }

    #[test]
    fn long_cycle() {
        let n = 100_000;
        let graph = AdjList::from_edges(n, (0..n).map(|v| (v, (v + 1) % n))).unwrap();
        let cycle = DirectedCycle::new(&graph);

        let cycle = cycle.cycle().unwrap();
        assert_eq!(cycle.len(), n + 1);
        assert_eq!(cycle.first(), Some(&(n - 1)));
        assert_eq!(cycle.last(), Some(&(n - 1)));
    }

    proptest! {
        #[test]
        fn proptest_cycle_any(graph in digraph().allow_loops()) {
            let cycle = DirectedCycle::new(&graph);
            check_cycle(&graph, &cycle).map_err(|error| TestCaseError::fail(error.to_string()))?;
            prop_assert_eq!(cycle.has_cycle(), !is_acyclic(&graph));
        }

        #[test]
        fn proptest_cycle_acyclic(graph in digraph().acyclic()) {
            prop_assert!(!is_cyclic(&graph));
        }

        #[test]
        fn proptest_cycle_petgraph(graph in digraph().allow_loops()) {
            let other = petgraph::graph::DiGraph::<(), ()>::from_edges(
                graph.edges().map(|(from, to)| (from as u32, to as u32)),
            );
            prop_assert_eq!(is_cyclic(&graph), petgraph::algo::is_cyclic_directed(&other));
        }
    }
}

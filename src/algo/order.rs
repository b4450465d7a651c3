//! [Depth-first orders] of the vertices of a directed graph.
//!
//! A single depth-first search over all vertices yields three orderings of
//! interest:
//!
//! * **preorder** -- vertices in the order in which they were discovered,
//! * **postorder** -- vertices in the order in which they were finished, that
//!   is, after all their descendants,
//! * **reverse postorder** -- postorder reversed. On a [directed acyclic
//!   graph] this is a [topological order](super::toposort).
//!
//! The traversal starts new trees at unvisited vertices in ascending order and
//! explores successors in their adjacency order, so the orders are fully
//! determined by the graph.
//!
//! [Depth-first orders]: https://en.wikipedia.org/wiki/Depth-first_search#Vertex_orderings
//! [directed acyclic graph]: https://en.wikipedia.org/wiki/Directed_acyclic_graph
//!
//! # Examples
//!
//! ```
//! use digraph_dfs::{algo::DepthFirstOrder, storage::AdjList};
//!
//! let graph = AdjList::from_edges(5, [(0, 1), (1, 2), (0, 2), (3, 4)]).unwrap();
//! let order = DepthFirstOrder::new(&graph);
//!
//! assert_eq!(order.preorder().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(order.postorder().collect::<Vec<_>>(), vec![2, 1, 0, 4, 3]);
//! assert_eq!(order.reverse_postorder().collect::<Vec<_>>(), vec![3, 4, 0, 1, 2]);
//!
//! assert_eq!(order.pre(2), 2);
//! assert_eq!(order.post(2), 0);
//! assert!(order.try_pre(5).is_err());
//! ```

use std::{
    iter::{Copied, Rev},
    slice,
};

use log::debug;

use crate::{
    core::{error::InvalidVertex, Successors},
    visit::{DfsEvent, DfsEvents},
};

/// Iterator over a stored vertex order.
pub type Order<'a> = Copied<slice::Iter<'a, usize>>;

/// Preorder, postorder and reverse postorder of all vertices of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl DepthFirstOrder {
    /// Runs the depth-first search over all vertices of the graph.
    pub fn new<G>(graph: &G) -> Self
    where
        G: Successors,
    {
        let vertex_count = graph.vertex_count();

        let mut order = Self {
            pre: vec![0; vertex_count],
            post: vec![0; vertex_count],
            preorder: Vec::with_capacity(vertex_count),
            postorder: Vec::with_capacity(vertex_count),
        };

        // The counters are shared by all depth-first trees.
        let mut pre_counter = 0;
        let mut post_counter = 0;

        for event in DfsEvents::new(graph) {
            match event {
                DfsEvent::Discover { vertex, .. } => {
                    order.pre[vertex] = pre_counter;
                    pre_counter += 1;
                    order.preorder.push(vertex);
                }
                DfsEvent::Finish { vertex } => {
                    order.postorder.push(vertex);
                    order.post[vertex] = post_counter;
                    post_counter += 1;
                }
                DfsEvent::BackEdge { .. } | DfsEvent::CrossEdge { .. } => {}
            }
        }

        debug!("computed depth-first orders of {vertex_count} vertices");

        order
    }

    pub fn vertex_count(&self) -> usize {
        self.pre.len()
    }

    /// Returns the preorder number of the vertex.
    pub fn try_pre(&self, vertex: usize) -> Result<usize, InvalidVertex> {
        self.pre
            .get(vertex)
            .copied()
            .ok_or_else(|| InvalidVertex::new(vertex, self.vertex_count()))
    }

    /// Returns the postorder number of the vertex.
    pub fn try_post(&self, vertex: usize) -> Result<usize, InvalidVertex> {
        self.post
            .get(vertex)
            .copied()
            .ok_or_else(|| InvalidVertex::new(vertex, self.vertex_count()))
    }

    /// Returns the preorder number of the vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is not in the graph.
    pub fn pre(&self, vertex: usize) -> usize {
        match self.try_pre(vertex) {
            Ok(number) => number,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the postorder number of the vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is not in the graph.
    pub fn post(&self, vertex: usize) -> usize {
        match self.try_post(vertex) {
            Ok(number) => number,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the vertices in the order of their discovery.
    pub fn preorder(&self) -> Order<'_> {
        self.preorder.iter().copied()
    }

    /// Returns the vertices in the order in which they were finished.
    pub fn postorder(&self) -> Order<'_> {
        self.postorder.iter().copied()
    }

    /// Returns the vertices in reverse postorder.
    ///
    /// This is a topological order if the graph has no directed cycle, which
    /// is not checked.
    pub fn reverse_postorder(&self) -> Rev<Order<'_>> {
        self.postorder().rev()
    }
}

//! Depth-first traversal of a whole directed graph, reported as a stream of
//! events.
//!
//! The traversal is **iterative**: it keeps an explicit stack of vertices
//! together with the position in their successor lists, so the depth of the
//! graph is limited only by available memory, not by the size of the program
//! stack. Nevertheless, the events are reported in exactly the same order as
//! the textbook recursive algorithm would perform the corresponding steps.
//! Successors are explored in the order given by
//! [`Successors::successors`](crate::core::Successors::successors) and new
//! trees are started at unvisited vertices in ascending order.
//!
//! # Examples
//!
//! ```
//! use digraph_dfs::{
//!     storage::AdjList,
//!     visit::{DfsEvent, DfsEvents},
//! };
//!
//! let graph = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
//!
//! let back_edge = DfsEvents::new(&graph).find_map(|event| match event {
//!     DfsEvent::BackEdge { from, to } => Some((from, to)),
//!     _ => None,
//! });
//!
//! assert_eq!(back_edge, Some((2, 0)));
//! ```

pub mod dfs;

#[doc(inline)]
pub use self::dfs::DfsEvents;

/// A step of the depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DfsEvent {
    /// The vertex was reached for the first time and became an open ancestor
    /// of everything discovered until its [`Finish`](DfsEvent::Finish).
    ///
    /// `parent` is `None` if the vertex is a root of a new depth-first tree.
    Discover { vertex: usize, parent: Option<usize> },
    /// The edge leads to a vertex that is currently open, that is, to an
    /// ancestor of `from` or to `from` itself.
    BackEdge { from: usize, to: usize },
    /// The edge leads to a vertex that has already been finished (a forward
    /// or cross edge).
    CrossEdge { from: usize, to: usize },
    /// All successors of the vertex have been handled.
    Finish { vertex: usize },
}

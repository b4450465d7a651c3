use std::iter::FusedIterator;

use fixedbitset::FixedBitSet;

use crate::core::{Successors, VertexSet};

use super::DfsEvent;

// Stack of "iterators" as described in
// https://11011110.github.io/blog/2013/12/17/stack-based-graph-traversal.html.
// Every open vertex keeps its own cursor into the successor list, which is what
// makes the order of events identical to the recursive formulation.
struct Frame<I> {
    vertex: usize,
    successors: I,
}

/// Iterator of [`DfsEvent`]s over all vertices of a graph.
///
/// Dropping the iterator stops the traversal.
pub struct DfsEvents<'a, G>
where
    G: Successors + 'a,
{
    graph: &'a G,
    stack: Vec<Frame<G::SuccessorsIter<'a>>>,
    marked: FixedBitSet,
    on_stack: FixedBitSet,
    next_root: usize,
}

impl<'a, G> DfsEvents<'a, G>
where
    G: Successors + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        let vertex_count = graph.vertex_count();

        Self {
            graph,
            stack: Vec::new(),
            marked: FixedBitSet::with_capacity(vertex_count),
            on_stack: FixedBitSet::with_capacity(vertex_count),
            next_root: 0,
        }
    }

    /// Returns `true` if the vertex has already been discovered.
    pub fn is_marked(&self, vertex: usize) -> bool {
        self.marked.contains(vertex)
    }

    /// Returns `true` if the vertex has been discovered but not finished yet.
    pub fn is_on_stack(&self, vertex: usize) -> bool {
        self.on_stack.contains(vertex)
    }

    /// Number of currently open vertices.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn discover(&mut self, vertex: usize) {
        let graph = self.graph;

        self.marked.insert(vertex);
        self.on_stack.insert(vertex);
        self.stack.push(Frame {
            vertex,
            successors: graph.successors(vertex),
        });
    }

    fn start_next_tree(&mut self) -> Option<DfsEvent> {
        let vertex_count = self.graph.vertex_count();

        while self.next_root < vertex_count && self.marked.contains(self.next_root) {
            self.next_root += 1;
        }

        if self.next_root == vertex_count {
            return None;
        }

        let root = self.next_root;
        self.discover(root);

        Some(DfsEvent::Discover {
            vertex: root,
            parent: None,
        })
    }
}

impl<'a, G> Iterator for DfsEvents<'a, G>
where
    G: Successors + 'a,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => return self.start_next_tree(),
        };

        let from = frame.vertex;

        let event = match frame.successors.next() {
            Some(to) if !self.marked.contains(to) => {
                self.discover(to);
                DfsEvent::Discover {
                    vertex: to,
                    parent: Some(from),
                }
            }
            Some(to) if self.on_stack.contains(to) => DfsEvent::BackEdge { from, to },
            Some(to) => DfsEvent::CrossEdge { from, to },
            None => {
                self.stack.pop();
                self.on_stack.set(from, false);
                DfsEvent::Finish { vertex: from }
            }
        };

        Some(event)
    }
}

impl<'a, G> FusedIterator for DfsEvents<'a, G> where G: Successors + 'a {}

#[cfg(test)]
mod tests {
    use crate::{storage::AdjList, visit::DfsEvent::*};

    use super::*;

    #[test]
    fn events_basic() {
        let graph = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 0)]).unwrap();

        let events = DfsEvents::new(&graph).collect::<Vec<_>>();

        assert_eq!(
            events,
            vec![
                Discover {
                    vertex: 0,
                    parent: None
                },
                Discover {
                    vertex: 1,
                    parent: Some(0)
                },
                Discover {
                    vertex: 3,
                    parent: Some(1)
                },
                BackEdge { from: 3, to: 0 },
                Finish { vertex: 3 },
                Finish { vertex: 1 },
                Discover {
                    vertex: 2,
                    parent: Some(0)
                },
                CrossEdge { from: 2, to: 3 },
                Finish { vertex: 2 },
                Finish { vertex: 0 },
            ]
        );
    }

    #[test]
    fn events_disconnected() {
        let graph = AdjList::from_edges(5, [(3, 4), (1, 0), (3, 0)]).unwrap();

        let roots = DfsEvents::new(&graph)
            .filter_map(|event| match event {
                Discover {
                    vertex,
                    parent: None,
                } => Some(vertex),
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(roots, vec![0, 1, 2, 3]);
    }

    #[test]
    fn events_self_loop() {
        let graph = AdjList::from_edges(1, [(0, 0)]).unwrap();

        let events = DfsEvents::new(&graph).collect::<Vec<_>>();

        assert_eq!(
            events,
            vec![
                Discover {
                    vertex: 0,
                    parent: None
                },
                BackEdge { from: 0, to: 0 },
                Finish { vertex: 0 },
            ]
        );
    }

    #[test]
    fn empty_graph() {
        let graph = AdjList::default();
        assert_eq!(DfsEvents::new(&graph).next(), None);
    }

    #[test]
    fn state_during_traversal() {
        let graph = AdjList::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        let mut dfs = DfsEvents::new(&graph);

        dfs.by_ref().take(3).for_each(drop);
        assert_eq!(dfs.depth(), 3);
        assert!(dfs.is_on_stack(0) && dfs.is_on_stack(2));

        assert_eq!(dfs.next(), Some(Finish { vertex: 2 }));
        assert!(dfs.is_marked(2));
        assert!(!dfs.is_on_stack(2));
        assert!(dfs.is_on_stack(1));
    }

    #[test]
    fn fused() {
        let graph = AdjList::new(2);
        let mut dfs = DfsEvents::new(&graph);

        assert_eq!(dfs.by_ref().count(), 4);
        assert_eq!(dfs.next(), None);
        assert_eq!(dfs.next(), None);
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 200_000;
        let graph = AdjList::from_edges(n, (1..n).map(|v| (v - 1, v))).unwrap();

        let mut max_depth = 0;
        let mut dfs = DfsEvents::new(&graph);
        while let Some(event) = dfs.next() {
            if let Discover { .. } = event {
                max_depth = max_depth.max(dfs.depth());
            }
        }

        assert_eq!(max_depth, n);
    }
}

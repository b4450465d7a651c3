use std::{fmt, ops::Deref};

use thiserror::Error;

use crate::{
    algo::{DepthFirstOrder, DirectedCycle},
    core::{Successors, VertexSet},
    storage::AdjList,
};

use super::export::Dot;

pub fn create_path(vertex_count: usize) -> AdjList {
    let mut graph = AdjList::new(vertex_count);

    for v in 1..vertex_count {
        graph.add_edge(v - 1, v);
    }

    graph
}

pub fn create_cycle(vertex_count: usize) -> AdjList {
    let mut graph = create_path(vertex_count);

    if vertex_count > 0 {
        graph.add_edge(vertex_count - 1, 0);
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("analysis covers {0} vertices but the graph has {1}")]
    VertexCountMismatch(usize, usize),
    #[error("{0} is not a permutation of the vertices")]
    NotPermutation(&'static str),
    #[error("{kind} number of vertex {vertex} ({actual}) is not its position in {kind}order ({expected})")]
    NumberMismatch {
        kind: &'static str,
        vertex: usize,
        actual: usize,
        expected: usize,
    },
    #[error("reverse postorder is not the reversed postorder")]
    ReversePostorderMismatch,
    #[error("edge {0} -> {1} is not consistent with depth-first numbering")]
    InvalidDfsEdge(usize, usize),
    #[error("cycle {0:?} is not a closed walk")]
    CycleNotClosed(Vec<usize>),
    #[error("cycle goes through {0} -> {1} which is not an edge")]
    CycleMissingEdge(usize, usize),
    #[error("cycle {0:?} visits a vertex more than once")]
    CycleNotSimple(Vec<usize>),
    #[error("cycle reported in an acyclic graph")]
    UnexpectedCycle,
    #[error("no cycle reported in a cyclic graph")]
    MissingCycle,
    #[error("edge {0} -> {1} goes against the topological order")]
    NotTopological(usize, usize),
}

fn is_permutation<I>(sequence: I, vertex_count: usize) -> bool
where
    I: IntoIterator<Item = usize>,
{
    let mut seen = vec![false; vertex_count];
    let mut count = 0;

    for v in sequence {
        if v >= vertex_count || seen[v] {
            return false;
        }

        seen[v] = true;
        count += 1;
    }

    count == vertex_count
}

fn has_edge<G>(graph: &G, from: usize, to: usize) -> bool
where
    G: Successors,
{
    graph.contains_vertex(from) && graph.successors(from).any(|v| v == to)
}

/// Checks acyclicity independently of depth-first search by repeatedly
/// removing vertices with no incoming edges (Kahn's algorithm).
pub fn is_acyclic<G>(graph: &G) -> bool
where
    G: Successors,
{
    let vertex_count = graph.vertex_count();
    let mut in_deg = vec![0usize; vertex_count];

    for from in 0..vertex_count {
        for to in graph.successors(from) {
            in_deg[to] += 1;
        }
    }

    let mut queue = (0..vertex_count)
        .filter(|&v| in_deg[v] == 0)
        .collect::<Vec<_>>();
    let mut removed = 0;

    while let Some(from) = queue.pop() {
        removed += 1;

        for to in graph.successors(from) {
            in_deg[to] -= 1;
            if in_deg[to] == 0 {
                queue.push(to);
            }
        }
    }

    removed == vertex_count
}

pub fn check_order<G>(graph: &G, order: &DepthFirstOrder) -> Result<(), CheckError>
where
    G: Successors,
{
    let vertex_count = graph.vertex_count();

    if order.vertex_count() != vertex_count {
        return Err(CheckError::VertexCountMismatch(
            order.vertex_count(),
            vertex_count,
        ));
    }

    if !is_permutation(order.preorder(), vertex_count) {
        return Err(CheckError::NotPermutation("preorder"));
    }

    if !is_permutation(order.postorder(), vertex_count) {
        return Err(CheckError::NotPermutation("postorder"));
    }

    for (expected, vertex) in order.preorder().enumerate() {
        let actual = order.pre(vertex);
        if actual != expected {
            return Err(CheckError::NumberMismatch {
                kind: "pre",
                vertex,
                actual,
                expected,
            });
        }
    }

    for (expected, vertex) in order.postorder().enumerate() {
        let actual = order.post(vertex);
        if actual != expected {
            return Err(CheckError::NumberMismatch {
                kind: "post",
                vertex,
                actual,
                expected,
            });
        }
    }

    let mut postorder = order.postorder().collect::<Vec<_>>();
    postorder.reverse();

    if !order.reverse_postorder().eq(postorder) {
        return Err(CheckError::ReversePostorderMismatch);
    }

    // Every edge either leads to a vertex finished earlier (tree, forward and
    // cross edges) or to an ancestor, which was discovered earlier and is
    // finished later (back edges, including self-loops).
    for from in 0..vertex_count {
        for to in graph.successors(from) {
            let finished_earlier = order.post(to) < order.post(from);
            let ancestor =
                order.pre(to) <= order.pre(from) && order.post(from) <= order.post(to);

            if !finished_earlier && !ancestor {
                return Err(CheckError::InvalidDfsEdge(from, to));
            }
        }
    }

    Ok(())
}

pub fn check_cycle<G>(graph: &G, cycle: &DirectedCycle) -> Result<(), CheckError>
where
    G: Successors,
{
    let cycle = match (cycle.cycle(), is_acyclic(graph)) {
        (Some(_), true) => return Err(CheckError::UnexpectedCycle),
        (None, false) => return Err(CheckError::MissingCycle),
        (None, true) => return Ok(()),
        (Some(cycle), false) => cycle,
    };

    if cycle.len() < 2 || cycle.first() != cycle.last() {
        return Err(CheckError::CycleNotClosed(cycle.to_vec()));
    }

    for pair in cycle.windows(2) {
        if !has_edge(graph, pair[0], pair[1]) {
            return Err(CheckError::CycleMissingEdge(pair[0], pair[1]));
        }
    }

    let open = &cycle[..cycle.len() - 1];
    let mut distinct = open.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    if distinct.len() != open.len() {
        return Err(CheckError::CycleNotSimple(cycle.to_vec()));
    }

    Ok(())
}

pub fn check_toposort<G>(graph: &G, sorted: &[usize]) -> Result<(), CheckError>
where
    G: Successors,
{
    let vertex_count = graph.vertex_count();

    if !is_permutation(sorted.iter().copied(), vertex_count) {
        return Err(CheckError::NotPermutation("topological order"));
    }

    let mut position = vec![0; vertex_count];
    for (i, &v) in sorted.iter().enumerate() {
        position[v] = i;
    }

    for from in 0..vertex_count {
        for to in graph.successors(from) {
            if position[from] >= position[to] {
                return Err(CheckError::NotTopological(from, to));
            }
        }
    }

    Ok(())
}

/// Graph wrapper that is formatted as Graphviz DOT in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct AsDot<G>(G);

impl<G> AsDot<G> {
    pub fn new(graph: G) -> Self {
        Self(graph)
    }
}

impl<G> Deref for AsDot<G> {
    type Target = G;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<G> fmt::Debug for AsDot<G>
where
    G: Successors,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Dot::default().to_string(&self.0))
    }
}

impl<G> VertexSet for AsDot<G>
where
    G: VertexSet,
{
    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        self.0.contains_vertex(vertex)
    }
}

impl<G> Successors for AsDot<G>
where
    G: Successors,
{
    type SuccessorsIter<'a> = G::SuccessorsIter<'a>
    where
        Self: 'a;

    fn successors(&self, vertex: usize) -> Self::SuccessorsIter<'_> {
        self.0.successors(vertex)
    }

    fn out_degree(&self, vertex: usize) -> usize {
        self.0.out_degree(vertex)
    }
}

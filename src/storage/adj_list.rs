use std::{collections::TryReserveError, fmt, iter::Copied, slice};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    Successors, VertexSet,
};

/// Directed graph stored as a list of successors for every vertex.
///
/// Vertices are dense indices `0..vertex_count()`. Parallel edges and
/// self-loops are allowed and the successors of a vertex are reported in the
/// order in which the edges were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjList {
    successors: Vec<Vec<usize>>,
    in_degrees: Vec<usize>,
    edge_count: usize,
}

pub type SuccessorsIter<'a> = Copied<slice::Iter<'a, usize>>;

impl AdjList {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); vertex_count],
            in_degrees: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Like [`new`](Self::new), but returns an error instead of aborting when
    /// the vertices cannot be allocated.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut successors = Vec::new();
        successors.try_reserve_exact(vertex_count)?;
        successors.resize_with(vertex_count, Vec::new);

        let mut in_degrees = Vec::new();
        in_degrees.try_reserve_exact(vertex_count)?;
        in_degrees.resize(vertex_count, 0);

        Ok(Self {
            successors,
            in_degrees,
            edge_count: 0,
        })
    }

    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, AddEdgeError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);

        for (from, to) in edges {
            graph.try_add_edge(from, to)?;
        }

        Ok(graph)
    }

    pub fn add_vertex(&mut self) -> usize {
        self.successors.push(Vec::new());
        self.in_degrees.push(0);
        self.successors.len() - 1
    }

    pub fn try_add_edge(&mut self, from: usize, to: usize) -> Result<(), AddEdgeError> {
        if !self.contains_vertex(from) {
            return Err(AddEdgeError::new(from, to, AddEdgeErrorKind::SourceAbsent));
        }

        if !self.contains_vertex(to) {
            return Err(AddEdgeError::new(
                from,
                to,
                AddEdgeErrorKind::DestinationAbsent,
            ));
        }

        self.successors[from].push(to);
        self.in_degrees[to] += 1;
        self.edge_count += 1;

        Ok(())
    }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        if let Err(error) = self.try_add_edge(from, to) {
            panic!("{error}");
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// # Panics
    ///
    /// Panics if `vertex` is not in the graph.
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.in_degrees[vertex]
    }

    /// Returns all edges as `(from, to)` pairs, grouped by the source vertex in
    /// ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, succ)| succ.iter().map(move |&to| (from, to)))
    }

    /// Returns a copy of the graph with all edges reversed.
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());

        for (from, to) in self.edges() {
            reversed.successors[to].push(from);
            reversed.in_degrees[from] += 1;
        }

        reversed.edge_count = self.edge_count;
        reversed
    }
}

impl VertexSet for AdjList {
    fn vertex_count(&self) -> usize {
        self.successors.len()
    }
}

impl Successors for AdjList {
    type SuccessorsIter<'a> = SuccessorsIter<'a>;

    fn successors(&self, vertex: usize) -> Self::SuccessorsIter<'_> {
        self.successors[vertex].iter().copied()
    }

    fn out_degree(&self, vertex: usize) -> usize {
        self.successors[vertex].len()
    }
}

impl fmt::Display for AdjList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.vertex_count(),
            self.edge_count
        )?;

        for (vertex, succ) in self.successors.iter().enumerate() {
            write!(f, "{vertex}:")?;
            for to in succ {
                write!(f, " {to}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
pub struct InvalidVertex {
    pub vertex: usize,
    pub vertex_count: usize,
}

impl InvalidVertex {
    pub fn new(vertex: usize, vertex_count: usize) -> Self {
        Self {
            vertex,
            vertex_count,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("adding edge {from} -> {to} failed: {kind}")]
pub struct AddEdgeError {
    pub from: usize,
    pub to: usize,
    pub kind: AddEdgeErrorKind,
}

impl AddEdgeError {
    pub fn new(from: usize, to: usize, kind: AddEdgeErrorKind) -> Self {
        Self { from, to, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_vertex_message() {
        assert_eq!(
            InvalidVertex::new(7, 3).to_string(),
            "vertex 7 is out of range for a graph with 3 vertices"
        );
    }

    #[test]
    fn add_edge_error_message() {
        let error = AddEdgeError::new(0, 5, AddEdgeErrorKind::DestinationAbsent);
        assert_eq!(
            error.to_string(),
            "adding edge 0 -> 5 failed: destination does not exist"
        );
    }
}

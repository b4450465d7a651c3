//! Reading and writing directed graphs in the plain edge-list text format.
//!
//! The format is a sequence of whitespace-separated non-negative integers: the
//! number of vertices, the number of edges and then the source and the target
//! of every edge. Line breaks are insignificant.
//!
//! ```text
//! 3
//! 3
//! 0 1
//! 1 2
//! 2 0
//! ```
//!
//! # Examples
//!
//! ```
//! use digraph_dfs::{algo::DirectedCycle, storage::AdjList};
//!
//! let graph: AdjList = "3 3\n0 1\n1 2\n2 0\n".parse().unwrap();
//!
//! assert_eq!(DirectedCycle::new(&graph).cycle(), Some(&[2, 0, 1, 2][..]));
//! ```

use std::{
    collections::TryReserveError,
    io::{self, BufRead, Write},
    num::ParseIntError,
    str::FromStr,
};

use log::trace;
use thiserror::Error;

use crate::{
    core::{error::AddEdgeError, Successors},
    storage::AdjList,
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("reading input failed: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("invalid {what} `{token}`")]
    InvalidNumber {
        what: &'static str,
        token: String,
        source: ParseIntError,
    },
    #[error("cannot allocate a graph with {vertex_count} vertices")]
    TooLarge {
        vertex_count: usize,
        source: TryReserveError,
    },
    #[error(transparent)]
    Edge(#[from] AddEdgeError),
    #[error("unexpected `{token}` after the last edge")]
    TrailingInput { token: String },
}

// Hands out the words of the current line as slices, reading the next line
// only when the current one is exhausted.
struct Words<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> Words<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    fn next_word(&mut self) -> Result<Option<&str>, io::Error> {
        loop {
            let rest = &self.line[self.pos..];
            let word = rest.trim_start();

            if !word.is_empty() {
                let start = self.pos + (rest.len() - word.len());
                let len = word.find(char::is_whitespace).unwrap_or(word.len());
                self.pos = start + len;
                return Ok(Some(&self.line[start..self.pos]));
            }

            self.line.clear();
            self.pos = 0;

            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    fn number(&mut self, what: &'static str) -> Result<usize, ParseError> {
        let token = self
            .next_word()?
            .ok_or(ParseError::UnexpectedEnd { expected: what })?;

        token
            .parse()
            .map_err(|source| ParseError::InvalidNumber {
                what,
                token: token.to_owned(),
                source,
            })
    }
}

/// Reads a graph in the edge-list format.
pub fn read_digraph<R: BufRead>(reader: R) -> Result<AdjList, ParseError> {
    let mut words = Words::new(reader);

    let vertex_count = words.number("vertex count")?;
    let edge_count = words.number("edge count")?;

    let mut graph = AdjList::try_new(vertex_count)
        .map_err(|source| ParseError::TooLarge {
            vertex_count,
            source,
        })?;

    for _ in 0..edge_count {
        let from = words.number("edge source")?;
        let to = words.number("edge target")?;
        graph.try_add_edge(from, to)?;
    }

    if let Some(token) = words.next_word()? {
        return Err(ParseError::TrailingInput {
            token: token.to_owned(),
        });
    }

    trace!("read digraph with {vertex_count} vertices and {edge_count} edges");

    Ok(graph)
}

/// Writes a graph in the edge-list format, one edge per line.
pub fn write_digraph<G, W>(graph: &G, out: &mut W) -> io::Result<()>
where
    G: Successors,
    W: Write,
{
    let vertex_count = graph.vertex_count();
    let edge_count = (0..vertex_count)
        .map(|v| graph.out_degree(v))
        .sum::<usize>();

    writeln!(out, "{vertex_count}")?;
    writeln!(out, "{edge_count}")?;

    for from in 0..vertex_count {
        for to in graph.successors(from) {
            writeln!(out, "{from} {to}")?;
        }
    }

    Ok(())
}

impl FromStr for AdjList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_digraph(s.as_bytes())
    }
}

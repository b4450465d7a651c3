use std::io::{self, Write};

use crate::core::Successors;

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Graphviz DOT representation of a graph.
pub struct Dot {
    name: String,
}

impl Dot {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
        }
    }

    pub fn to_string<G>(&self, graph: &G) -> String
    where
        G: Successors,
    {
        let mut buf = Vec::new();
        self.export(graph, &mut buf)
            .expect("writing to vec does not fail");

        String::from_utf8(buf).expect("dot format is text format")
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<G> Export<G> for Dot
where
    G: Successors,
{
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph {} {{", self.name)?;

        for vertex in 0..graph.vertex_count() {
            writeln!(out, "    v{vertex};")?;
        }

        for from in 0..graph.vertex_count() {
            for to in graph.successors(from) {
                writeln!(out, "    v{from} -> v{to};")?;
            }
        }

        writeln!(out, "}}")
    }
}

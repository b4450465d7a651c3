#![allow(dead_code)]

use digraph_dfs::storage::AdjList;
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

// Efficient generation of large random networks
// http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    // Always returns `(v, w)` with `v > w`.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

pub fn random_edges(
    vertex_count: usize,
    density: f32,
    acyclic: bool,
    rng: &mut Rng,
) -> Vec<(usize, usize)> {
    let mut edges = RandomEdges::new(vertex_count, density);
    let mut result = Vec::new();

    while let Some((u, v)) = edges.next_edge(rng) {
        if acyclic || rng.bool() {
            result.push((u, v));
        } else {
            result.push((v, u));
        }
    }

    result
}

pub fn adj_list_random(vertex_count: usize, density: f32, acyclic: bool, rng: &mut Rng) -> AdjList {
    let edges = random_edges(vertex_count, density, acyclic, rng);
    AdjList::from_edges(vertex_count, edges).expect("random edges are in range")
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    acyclic: bool,
    rng: &mut Rng,
) -> petgraph::Graph<(), (), petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v) in random_edges(vertex_count, density, acyclic, rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}

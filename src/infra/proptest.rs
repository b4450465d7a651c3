use proptest::{
    collection::vec,
    strategy::{BoxedStrategy, Just, NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};

use crate::storage::AdjList;

use super::testing::AsDot;

pub fn digraph() -> DigraphStrategy {
    DigraphStrategy::new()
}

/// Strategy generating random directed graphs, wrapped in [`AsDot`] so that
/// failing cases are printed in Graphviz DOT format.
#[derive(Debug, Clone, Default)]
pub struct DigraphStrategy {
    params: StrategyParams,
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
            }
        }
    }
}

impl DigraphStrategy {
    pub fn new() -> Self {
        Self::with_params(StrategyParams::default())
    }

    pub fn with_params(params: StrategyParams) -> Self {
        Self { params }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `digraph().max_size(100).acyclic()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(acyclic);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    allow_loops: bool,
    // (0, 1] - upper bound on the number of edges relative to the number of
    // vertex pairs
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            acyclic: false,
            allow_loops: false,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn acyclic(self) -> Self {
        Self {
            acyclic: true,
            ..self
        }
    }

    /// Ignored for acyclic graphs.
    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }

    fn strategy(self) -> BoxedStrategy<AsDot<AdjList>> {
        (0..=self.max_size)
            .prop_flat_map(move |n| {
                let bound = n.max(1);
                let max_edges = ((n * n) as f32 * self.density).ceil() as usize;

                // Random relabeling hides the natural topological order of
                // acyclic graphs.
                let labels = Just((0..n).collect::<Vec<_>>()).prop_shuffle();

                (vec((0..bound, 0..bound), 0..=max_edges), labels)
            })
            .prop_map(move |(edges, labels)| {
                let mut graph = AdjList::new(labels.len());

                for (s, t) in edges {
                    let (s, t) = if self.acyclic {
                        (s.min(t), s.max(t))
                    } else {
                        (s, t)
                    };

                    if s == t && (self.acyclic || !self.allow_loops) {
                        continue;
                    }

                    graph.add_edge(labels[s], labels[t]);
                }

                AsDot::new(graph)
            })
            .boxed()
    }
}

impl Strategy for DigraphStrategy {
    type Tree = Box<dyn ValueTree<Value = AsDot<AdjList>>>;
    type Value = AsDot<AdjList>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        self.params.strategy().new_tree(runner)
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use digraph_dfs::{algo::DirectedCycle, infra::testing::check_cycle, storage::AdjList};

fuzz_target!(|graph: AdjList| {
    check_cycle(&graph, &DirectedCycle::new(&graph))
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();
});

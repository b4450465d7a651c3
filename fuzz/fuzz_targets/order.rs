#![no_main]

use libfuzzer_sys::fuzz_target;

use digraph_dfs::{
    algo::DepthFirstOrder,
    infra::testing::{check_order, check_toposort, is_acyclic},
    storage::AdjList,
};

fuzz_target!(|graph: AdjList| {
    let order = DepthFirstOrder::new(&graph);

    check_order(&graph, &order)
        .as_ref()
        .map_err(ToString::to_string)
        .unwrap();

    if is_acyclic(&graph) {
        let sorted = order.reverse_postorder().collect::<Vec<_>>();
        check_toposort(&graph, &sorted)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});

pub mod cycle;
pub mod order;
pub mod toposort;

pub use cycle::{is_cyclic, DirectedCycle};
pub use order::DepthFirstOrder;
pub use toposort::toposort;

pub mod error;

mod successors;
mod vertices;

pub use successors::*;
pub use vertices::*;

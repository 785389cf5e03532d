pub mod node;
pub mod svg;

pub use node::*;

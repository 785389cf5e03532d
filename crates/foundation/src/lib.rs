pub mod grid;
pub mod paint;

// Foundation crate: small, well-tested primitives only.
pub use grid::*;
pub use paint::*;

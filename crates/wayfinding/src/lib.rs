pub mod path;
pub mod render;
pub mod resolver;
pub mod style;
pub mod theme;
pub mod tier;

pub use path::SuggestedPath;
pub use render::render_map;
pub use resolver::{HighlightHint, ResolvedHighlight};
pub use tier::ViewportTier;

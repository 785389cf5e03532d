use foundation::{Bounds, Paint, Point};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextBaseline {
    Auto,
    Middle,
    Central,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
}

impl Stroke {
    pub const fn new(paint: Paint, width: f64) -> Self {
        Self { paint, width }
    }
}

/// One drawable element of the scene.
///
/// Coordinates are grid units; `opacity` is the element's final composited
/// opacity. Nodes are flat (no grouping), so a producer that wants a group
/// fade applies it to each member before pushing.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Rect {
        bounds: Bounds,
        corner_radius: f64,
        fill: Paint,
        stroke: Option<Stroke>,
        opacity: f32,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Paint,
        stroke: Option<Stroke>,
        opacity: f32,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
        opacity: f32,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
        /// Dash and gap lengths; `None` draws a solid line.
        dash: Option<(f64, f64)>,
        round_cap: bool,
        opacity: f32,
    },
    Text {
        position: Point,
        content: String,
        size: f64,
        weight: u16,
        letter_spacing: Option<f64>,
        fill: Paint,
        anchor: TextAnchor,
        baseline: TextBaseline,
        opacity: f32,
    },
}

/// Ordered scene description in a fixed coordinate space.
///
/// Node order is z-order: later nodes paint over earlier ones. Any backend
/// that preserves that order and scales uniformly (`xMidYMid` fit) renders
/// the scene faithfully.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }
}

/// Normalized store grid.
///
/// Every map element is positioned inside this fixed coordinate space. The
/// grid, not pixels, is the source of truth: callers scale the finished scene
/// to their surface and must preserve the aspect ratio while doing so.
pub const GRID_WIDTH: f64 = 100.0;
pub const GRID_HEIGHT: f64 = 70.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in grid units, origin at the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Rectangle grown by `margin` on every side.
    pub fn inflate(&self, margin: f64) -> Bounds {
        Bounds::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }

    /// True when `other` lies entirely inside `self` (shared edges count as
    /// inside).
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::{Bounds, Point};

    #[test]
    fn midpoints_and_center() {
        let b = Bounds::new(10.0, 20.0, 4.0, 44.0);
        assert_eq!(b.mid_x(), 12.0);
        assert_eq!(b.mid_y(), 42.0);
        assert_eq!(b.center(), Point::new(12.0, 42.0));
    }

    #[test]
    fn contains_point_edges_inclusive() {
        let b = Bounds::new(0.0, 0.0, 10.0, 5.0);
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(10.0, 5.0)));
        assert!(b.contains(Point::new(4.0, 2.5)));
        assert!(!b.contains(Point::new(10.1, 2.0)));
        assert!(!b.contains(Point::new(4.0, -0.1)));
    }

    #[test]
    fn inflate_grows_every_side() {
        let b = Bounds::new(12.0, 12.0, 4.0, 44.0).inflate(2.5);
        assert_eq!(b, Bounds::new(9.5, 9.5, 9.0, 49.0));
        assert!(b.contains(Point::new(10.5, 18.0)));
    }

    #[test]
    fn contains_bounds_requires_full_containment() {
        let outer = Bounds::new(6.0, 10.0, 28.0, 48.0);
        assert!(outer.contains_bounds(&Bounds::new(12.0, 12.0, 4.0, 44.0)));
        assert!(outer.contains_bounds(&outer));
        assert!(!outer.contains_bounds(&Bounds::new(12.0, 12.0, 4.0, 47.0)));
        assert!(!outer.contains_bounds(&Bounds::new(2.0, 12.0, 4.0, 10.0)));
    }
}

use foundation::Point;
use layout::{Shelf, StoreLayout};

/// Suggested walking path from the entrance to a shelf: straight in along
/// the entrance row, then turn toward the shelf. A static two-segment
/// approximation, not obstacle-aware routing.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedPath {
    points: [Point; 3],
}

impl SuggestedPath {
    /// `None` without a resolved shelf. Recomputed on every render; a path
    /// is never carried over from a previously resolved shelf.
    pub fn to_shelf(layout: &StoreLayout, shelf: Option<&Shelf>) -> Option<Self> {
        let shelf = shelf?;
        let entrance = layout.entrance();
        let turn = Point::new(shelf.position.x, entrance.y);
        Some(Self {
            points: [entrance, turn, shelf.position],
        })
    }

    pub fn points(&self) -> &[Point; 3] {
        &self.points
    }
}

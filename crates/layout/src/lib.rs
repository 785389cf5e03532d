use foundation::{Bounds, Paint, Point};

mod demo;

/// Shelf markers sit beside their lane, not inside it, so a shelf position is
/// valid as long as it stays within this reach of the aisle bounds.
pub const SHELF_REACH: f64 = 2.5;

/// Largest spatial grouping in the store. Owns a rectangular region and
/// references its child aisles by label.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub name: String,
    pub color: Paint,
    pub bounds: Bounds,
    pub aisle_labels: Vec<String>,
    /// BLE beacon installed in this zone, if any. Used by the proximity
    /// assistance endpoint to map a sighted beacon back to a zone name.
    pub beacon_id: Option<String>,
}

/// A lane within a zone. The lane bounds must lie inside the owning zone's
/// bounds; `StoreLayout::new` rejects layouts that break this.
#[derive(Debug, Clone, PartialEq)]
pub struct Aisle {
    pub label: String,
    pub zone_name: String,
    pub bounds: Bounds,
}

/// A point location within an aisle, identified by a short code such as
/// `S1-L1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelf {
    pub code: String,
    pub aisle_label: String,
    pub position: Point,
}

/// Integrity failure found while constructing a [`StoreLayout`].
///
/// These indicate a build-time data bug, not a runtime condition: callers
/// should treat them as fatal at startup. A layout that passed construction
/// can never produce one of these afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    DuplicateZone(String),
    DuplicateAisle(String),
    DuplicateShelf(String),
    UnknownZone { aisle: String, zone: String },
    UnknownAisleForShelf { shelf: String, aisle: String },
    UnknownAisleInZone { zone: String, aisle: String },
    ZoneMismatch { zone: String, aisle: String },
    AisleOutsideZone { aisle: String, zone: String },
    ShelfOutsideAisle { shelf: String, aisle: String },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::DuplicateZone(name) => write!(f, "duplicate zone name: {name}"),
            LayoutError::DuplicateAisle(label) => write!(f, "duplicate aisle label: {label}"),
            LayoutError::DuplicateShelf(code) => write!(f, "duplicate shelf code: {code}"),
            LayoutError::UnknownZone { aisle, zone } => {
                write!(f, "aisle {aisle} references unknown zone {zone}")
            }
            LayoutError::UnknownAisleForShelf { shelf, aisle } => {
                write!(f, "shelf {shelf} references unknown aisle {aisle}")
            }
            LayoutError::UnknownAisleInZone { zone, aisle } => {
                write!(f, "zone {zone} lists unknown aisle {aisle}")
            }
            LayoutError::ZoneMismatch { zone, aisle } => {
                write!(f, "zone {zone} lists aisle {aisle}, which belongs to another zone")
            }
            LayoutError::AisleOutsideZone { aisle, zone } => {
                write!(f, "aisle {aisle} extends outside zone {zone}")
            }
            LayoutError::ShelfOutsideAisle { shelf, aisle } => {
                write!(f, "shelf {shelf} lies outside aisle {aisle}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Immutable store layout: zones, aisles, shelves, and the two fixed
/// waypoints, all in the shared normalized grid.
///
/// Constructed once at startup via [`StoreLayout::new`], which runs the full
/// integrity pass. Every read happens through shared references; nothing
/// mutates a layout after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreLayout {
    zones: Vec<Zone>,
    aisles: Vec<Aisle>,
    shelves: Vec<Shelf>,
    entrance: Point,
    exit: Point,
}

impl StoreLayout {
    pub fn new(
        zones: Vec<Zone>,
        aisles: Vec<Aisle>,
        shelves: Vec<Shelf>,
        entrance: Point,
        exit: Point,
    ) -> Result<Self, LayoutError> {
        let layout = Self {
            zones,
            aisles,
            shelves,
            entrance,
            exit,
        };
        layout.validate()?;
        Ok(layout)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn aisles(&self) -> &[Aisle] {
        &self.aisles
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn entrance(&self) -> Point {
        self.entrance
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    pub fn aisles_in_zone<'a>(&'a self, zone: &'a Zone) -> impl Iterator<Item = &'a Aisle> {
        self.aisles
            .iter()
            .filter(move |aisle| zone.aisle_labels.iter().any(|l| l == &aisle.label))
    }

    pub fn shelves_in_aisle<'a>(&'a self, aisle: &'a Aisle) -> impl Iterator<Item = &'a Shelf> {
        self.shelves
            .iter()
            .filter(move |shelf| shelf.aisle_label == aisle.label)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let mut zone_keys = Vec::with_capacity(self.zones.len());
        for zone in &self.zones {
            let key = zone.name.to_lowercase();
            if zone_keys.contains(&key) {
                return Err(LayoutError::DuplicateZone(zone.name.clone()));
            }
            zone_keys.push(key);
        }

        let mut aisle_keys = Vec::with_capacity(self.aisles.len());
        for aisle in &self.aisles {
            let key = aisle.label.to_lowercase();
            if aisle_keys.contains(&key) {
                return Err(LayoutError::DuplicateAisle(aisle.label.clone()));
            }
            aisle_keys.push(key);
        }

        let mut shelf_keys = Vec::with_capacity(self.shelves.len());
        for shelf in &self.shelves {
            let key = shelf.code.to_lowercase();
            if shelf_keys.contains(&key) {
                return Err(LayoutError::DuplicateShelf(shelf.code.clone()));
            }
            shelf_keys.push(key);
        }

        for aisle in &self.aisles {
            let Some(zone) = self.zones.iter().find(|z| z.name == aisle.zone_name) else {
                return Err(LayoutError::UnknownZone {
                    aisle: aisle.label.clone(),
                    zone: aisle.zone_name.clone(),
                });
            };
            if !zone.aisle_labels.iter().any(|l| l == &aisle.label) {
                return Err(LayoutError::ZoneMismatch {
                    zone: zone.name.clone(),
                    aisle: aisle.label.clone(),
                });
            }
            if !zone.bounds.contains_bounds(&aisle.bounds) {
                return Err(LayoutError::AisleOutsideZone {
                    aisle: aisle.label.clone(),
                    zone: zone.name.clone(),
                });
            }
        }

        for zone in &self.zones {
            for label in &zone.aisle_labels {
                let Some(aisle) = self.aisles.iter().find(|a| &a.label == label) else {
                    return Err(LayoutError::UnknownAisleInZone {
                        zone: zone.name.clone(),
                        aisle: label.clone(),
                    });
                };
                if aisle.zone_name != zone.name {
                    return Err(LayoutError::ZoneMismatch {
                        zone: zone.name.clone(),
                        aisle: label.clone(),
                    });
                }
            }
        }

        for shelf in &self.shelves {
            let Some(aisle) = self.aisles.iter().find(|a| a.label == shelf.aisle_label) else {
                return Err(LayoutError::UnknownAisleForShelf {
                    shelf: shelf.code.clone(),
                    aisle: shelf.aisle_label.clone(),
                });
            };
            if !aisle.bounds.inflate(SHELF_REACH).contains(shelf.position) {
                return Err(LayoutError::ShelfOutsideAisle {
                    shelf: shelf.code.clone(),
                    aisle: aisle.label.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Aisle, LayoutError, Shelf, StoreLayout, Zone};
    use foundation::{Bounds, Paint, Point};
    use pretty_assertions::assert_eq;

    fn zone(name: &str, bounds: Bounds, aisle_labels: &[&str]) -> Zone {
        Zone {
            name: name.to_string(),
            color: Paint::rgba(34, 211, 238, 0.08),
            bounds,
            aisle_labels: aisle_labels.iter().map(|l| l.to_string()).collect(),
            beacon_id: None,
        }
    }

    fn aisle(label: &str, zone_name: &str, bounds: Bounds) -> Aisle {
        Aisle {
            label: label.to_string(),
            zone_name: zone_name.to_string(),
            bounds,
        }
    }

    fn shelf(code: &str, aisle_label: &str, position: Point) -> Shelf {
        Shelf {
            code: code.to_string(),
            aisle_label: aisle_label.to_string(),
            position,
        }
    }

    #[test]
    fn demo_store_validates() {
        let layout = StoreLayout::demo_store().unwrap();
        assert_eq!(layout.zones().len(), 3);
        assert_eq!(layout.aisles().len(), 5);
        assert_eq!(layout.shelves().len(), 10);
        assert_eq!(layout.entrance(), Point::new(10.0, 62.0));
        assert_eq!(layout.exit(), Point::new(84.0, 62.0));
    }

    #[test]
    fn rejects_duplicate_keys_case_insensitively() {
        let bounds = Bounds::new(0.0, 0.0, 20.0, 20.0);
        let err = StoreLayout::new(
            vec![zone("Snacks", bounds, &[]), zone("snacks", bounds, &[])],
            Vec::new(),
            Vec::new(),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::DuplicateZone("snacks".to_string()));
    }

    #[test]
    fn rejects_aisle_outside_zone_bounds() {
        let err = StoreLayout::new(
            vec![zone("Snacks", Bounds::new(6.0, 10.0, 28.0, 48.0), &["S1"])],
            vec![aisle("S1", "Snacks", Bounds::new(12.0, 12.0, 4.0, 50.0))],
            Vec::new(),
            Point::new(10.0, 62.0),
            Point::new(84.0, 62.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::AisleOutsideZone {
                aisle: "S1".to_string(),
                zone: "Snacks".to_string(),
            }
        );
    }

    #[test]
    fn accepts_shelf_marker_beside_its_lane() {
        // Shelf markers hang off the lane edge; within SHELF_REACH is valid.
        let layout = StoreLayout::new(
            vec![zone("Snacks", Bounds::new(6.0, 10.0, 28.0, 48.0), &["S1"])],
            vec![aisle("S1", "Snacks", Bounds::new(12.0, 12.0, 4.0, 44.0))],
            vec![shelf("S1-L1", "S1", Point::new(10.5, 18.0))],
            Point::new(10.0, 62.0),
            Point::new(84.0, 62.0),
        );
        assert!(layout.is_ok());
    }

    #[test]
    fn rejects_shelf_outside_aisle_reach() {
        let err = StoreLayout::new(
            vec![zone("Snacks", Bounds::new(6.0, 10.0, 28.0, 48.0), &["S1"])],
            vec![aisle("S1", "Snacks", Bounds::new(12.0, 12.0, 4.0, 44.0))],
            vec![shelf("S1-L1", "S1", Point::new(30.0, 18.0))],
            Point::new(10.0, 62.0),
            Point::new(84.0, 62.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::ShelfOutsideAisle {
                shelf: "S1-L1".to_string(),
                aisle: "S1".to_string(),
            }
        );
    }

    #[test]
    fn rejects_dangling_references() {
        let err = StoreLayout::new(
            vec![zone("Snacks", Bounds::new(6.0, 10.0, 28.0, 48.0), &["S1"])],
            vec![aisle("S1", "Sweets", Bounds::new(12.0, 12.0, 4.0, 44.0))],
            Vec::new(),
            Point::new(10.0, 62.0),
            Point::new(84.0, 62.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnknownZone {
                aisle: "S1".to_string(),
                zone: "Sweets".to_string(),
            }
        );

        let err = StoreLayout::new(
            vec![zone("Snacks", Bounds::new(6.0, 10.0, 28.0, 48.0), &["S1"])],
            vec![aisle("S1", "Snacks", Bounds::new(12.0, 12.0, 4.0, 44.0))],
            vec![shelf("X9-L1", "X9", Point::new(13.0, 18.0))],
            Point::new(10.0, 62.0),
            Point::new(84.0, 62.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnknownAisleForShelf {
                shelf: "X9-L1".to_string(),
                aisle: "X9".to_string(),
            }
        );
    }

    #[test]
    fn rejects_zone_listing_foreign_aisle() {
        let err = StoreLayout::new(
            vec![
                zone("Snacks", Bounds::new(6.0, 10.0, 28.0, 48.0), &["S1", "B1"]),
                zone("Beverages", Bounds::new(38.0, 10.0, 26.0, 48.0), &["B1"]),
            ],
            vec![
                aisle("S1", "Snacks", Bounds::new(12.0, 12.0, 4.0, 44.0)),
                aisle("B1", "Beverages", Bounds::new(44.0, 12.0, 4.0, 44.0)),
            ],
            Vec::new(),
            Point::new(10.0, 62.0),
            Point::new(84.0, 62.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::ZoneMismatch {
                zone: "Snacks".to_string(),
                aisle: "B1".to_string(),
            }
        );
    }

    #[test]
    fn child_iterators_follow_back_references() {
        let layout = StoreLayout::demo_store().unwrap();
        let snacks = &layout.zones()[0];
        let labels: Vec<&str> = layout
            .aisles_in_zone(snacks)
            .map(|a| a.label.as_str())
            .collect();
        assert_eq!(labels, vec!["S1", "S2"]);

        let s1 = &layout.aisles()[0];
        let codes: Vec<&str> = layout
            .shelves_in_aisle(s1)
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(codes, vec!["S1-L1", "S1-L2"]);
    }
}

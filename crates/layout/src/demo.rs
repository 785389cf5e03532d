use foundation::{Bounds, Paint, Point};

use crate::{Aisle, LayoutError, Shelf, StoreLayout, Zone};

fn zone(
    name: &str,
    color: Paint,
    bounds: Bounds,
    aisle_labels: &[&str],
    beacon_id: &str,
) -> Zone {
    Zone {
        name: name.to_string(),
        color,
        bounds,
        aisle_labels: aisle_labels.iter().map(|l| l.to_string()).collect(),
        beacon_id: Some(beacon_id.to_string()),
    }
}

fn aisle(label: &str, zone_name: &str, bounds: Bounds) -> Aisle {
    Aisle {
        label: label.to_string(),
        zone_name: zone_name.to_string(),
        bounds,
    }
}

fn shelf(code: &str, aisle_label: &str, x: f64, y: f64) -> Shelf {
    Shelf {
        code: code.to_string(),
        aisle_label: aisle_label.to_string(),
        position: Point::new(x, y),
    }
}

impl StoreLayout {
    /// Built-in layout of the demo convenience store: three zones, five
    /// aisle lanes, ten shelves, entrance on the lower-left and exit on the
    /// lower-right. All coordinates sit in the normalized grid.
    pub fn demo_store() -> Result<Self, LayoutError> {
        let zones = vec![
            zone(
                "Snacks",
                Paint::rgba(34, 211, 238, 0.08),
                Bounds::new(6.0, 10.0, 28.0, 48.0),
                &["S1", "S2"],
                "ble-zone-snacks",
            ),
            zone(
                "Beverages",
                Paint::rgba(14, 165, 233, 0.08),
                Bounds::new(38.0, 10.0, 26.0, 48.0),
                &["B1", "B2"],
                "ble-zone-beverages",
            ),
            zone(
                "Dairy",
                Paint::rgba(99, 102, 241, 0.08),
                Bounds::new(68.0, 10.0, 24.0, 48.0),
                &["D1"],
                "ble-zone-dairy",
            ),
        ];

        let aisles = vec![
            aisle("S1", "Snacks", Bounds::new(12.0, 12.0, 4.0, 44.0)),
            aisle("S2", "Snacks", Bounds::new(24.0, 12.0, 4.0, 44.0)),
            aisle("B1", "Beverages", Bounds::new(44.0, 12.0, 4.0, 44.0)),
            aisle("B2", "Beverages", Bounds::new(56.0, 12.0, 4.0, 44.0)),
            aisle("D1", "Dairy", Bounds::new(74.0, 12.0, 4.0, 44.0)),
        ];

        let shelves = vec![
            shelf("S1-L1", "S1", 10.5, 18.0),
            shelf("S1-L2", "S1", 10.5, 34.0),
            shelf("S2-R1", "S2", 28.5, 20.0),
            shelf("S2-R2", "S2", 28.5, 36.0),
            shelf("B1-L1", "B1", 42.5, 18.0),
            shelf("B1-L2", "B1", 42.5, 34.0),
            shelf("B2-R1", "B2", 60.5, 18.0),
            shelf("B2-R2", "B2", 60.5, 36.0),
            shelf("D1-L1", "D1", 72.5, 18.0),
            shelf("D1-L2", "D1", 72.5, 34.0),
        ];

        Self::new(
            zones,
            aisles,
            shelves,
            Point::new(10.0, 62.0),
            Point::new(84.0, 62.0),
        )
    }
}

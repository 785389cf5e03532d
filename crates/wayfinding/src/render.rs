use foundation::{Bounds, GRID_HEIGHT, GRID_WIDTH, Paint, Point};
use layout::{Aisle, StoreLayout, Zone};
use scene::{Scene, SceneNode, Stroke, TextAnchor, TextBaseline};

use crate::path::SuggestedPath;
use crate::resolver::{HighlightHint, ResolvedHighlight};
use crate::style;
use crate::theme;
use crate::tier::ViewportTier;

const ZONE_LABEL_MARGIN: f64 = 1.5;
const ZONE_LABEL_MIN_Y: f64 = 2.0;
const AISLE_LABEL_GUTTER: f64 = 3.0;
const SHELF_LABEL_GUTTER: f64 = 5.0;
const SHELF_LEADER_LENGTH: f64 = 2.2;
const SHELF_RADIUS: f64 = 2.2;
const WAYPOINT_RADIUS: f64 = 2.6;

/// Composes the full floor-map scene for one render call.
///
/// Pure and total: an unresolvable hint degrades to "nothing highlighted"
/// and an invalid viewport height degrades to the mobile tier; this function
/// never fails. Equal inputs produce equal scenes.
///
/// Z-order: floor, zone regions, aisle lanes with their shelves, path
/// overlay, entrance/exit markers, legend.
pub fn render_map(layout: &StoreLayout, hint: &HighlightHint, viewport_height: f64) -> Scene {
    let resolved = ResolvedHighlight::resolve(layout, hint);
    let tier = ViewportTier::classify(viewport_height);
    let path = SuggestedPath::to_shelf(layout, resolved.shelf);

    let mut out = Scene::new(GRID_WIDTH, GRID_HEIGHT);
    out.push(SceneNode::Rect {
        bounds: Bounds::new(0.0, 0.0, GRID_WIDTH, GRID_HEIGHT),
        corner_radius: 0.0,
        fill: theme::FLOOR,
        stroke: None,
        opacity: 1.0,
    });

    for zone in layout.zones() {
        push_zone(&mut out, zone, &resolved, tier);
    }
    for aisle in layout.aisles() {
        push_aisle(&mut out, layout, aisle, &resolved, tier);
    }

    if let Some(path) = &path {
        out.push(SceneNode::Polyline {
            points: path.points().to_vec(),
            stroke: Stroke::new(theme::PATH_STROKE, 0.9),
            dash: Some((2.0, 3.5)),
            round_cap: true,
            opacity: 1.0,
        });
    }

    push_waypoint(
        &mut out,
        layout.entrance(),
        "IN",
        theme::ENTRANCE_FILL,
        theme::ENTRANCE_STROKE,
        theme::ENTRANCE_TEXT,
    );
    push_waypoint(
        &mut out,
        layout.exit(),
        "OUT",
        theme::EXIT_FILL,
        theme::EXIT_STROKE,
        theme::EXIT_TEXT,
    );

    if tier == ViewportTier::Desktop {
        push_legend(&mut out);
    }

    out
}

fn push_zone(out: &mut Scene, zone: &Zone, resolved: &ResolvedHighlight<'_>, tier: ViewportTier) {
    let opacity = style::zone_opacity(zone, resolved);
    out.push(SceneNode::Rect {
        bounds: zone.bounds,
        corner_radius: 4.0,
        fill: zone.color,
        stroke: Some(Stroke::new(theme::ZONE_STROKE, 0.4)),
        opacity,
    });
    if style::zone_label_visible(zone, resolved, tier) {
        // Anchored above the region, clamped so it never leaves the grid.
        let label_y = (zone.bounds.y - ZONE_LABEL_MARGIN).max(ZONE_LABEL_MIN_Y);
        out.push(SceneNode::Text {
            position: Point::new(zone.bounds.mid_x(), label_y),
            content: zone.name.clone(),
            size: 3.0,
            weight: 600,
            letter_spacing: Some(0.08),
            fill: theme::LABEL_LIGHT,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Auto,
            opacity,
        });
    }
}

fn push_aisle(
    out: &mut Scene,
    layout: &StoreLayout,
    aisle: &Aisle,
    resolved: &ResolvedHighlight<'_>,
    tier: ViewportTier,
) {
    let active = style::aisle_is_active(aisle, resolved);
    let opacity = style::aisle_opacity(aisle, resolved);
    let on_left = style::label_on_left(aisle);

    out.push(SceneNode::Rect {
        bounds: aisle.bounds,
        corner_radius: 2.0,
        fill: if active {
            theme::AISLE_ACTIVE
        } else {
            theme::AISLE_IDLE
        },
        stroke: None,
        opacity,
    });

    if style::aisle_label_visible(aisle, resolved, tier) {
        let label_x = if on_left {
            aisle.bounds.x - AISLE_LABEL_GUTTER
        } else {
            aisle.bounds.x + aisle.bounds.width + AISLE_LABEL_GUTTER
        };
        out.push(SceneNode::Text {
            position: Point::new(label_x, aisle.bounds.mid_y()),
            content: aisle.label.clone(),
            size: 2.2,
            weight: 700,
            letter_spacing: None,
            fill: if active {
                theme::AISLE_LABEL_ACTIVE
            } else {
                theme::AISLE_LABEL_IDLE
            },
            anchor: if on_left {
                TextAnchor::End
            } else {
                TextAnchor::Start
            },
            baseline: TextBaseline::Middle,
            opacity,
        });
    }

    for shelf in layout.shelves_in_aisle(aisle) {
        let shelf_active = style::shelf_is_active(shelf, resolved);
        // Lane dimming composes with the marker's own fade.
        let shelf_opacity = opacity * style::shelf_opacity(shelf, resolved);
        out.push(SceneNode::Circle {
            center: shelf.position,
            radius: SHELF_RADIUS,
            fill: if shelf_active {
                theme::SHELF_ACTIVE_FILL
            } else {
                theme::SHELF_IDLE_FILL
            },
            stroke: Some(Stroke::new(
                if shelf_active {
                    theme::SHELF_ACTIVE_STROKE
                } else {
                    theme::SHELF_IDLE_STROKE
                },
                0.45,
            )),
            opacity: shelf_opacity,
        });

        if style::shelf_label_visible(shelf, resolved, tier) {
            let label_x = if on_left {
                shelf.position.x - SHELF_LABEL_GUTTER
            } else {
                shelf.position.x + SHELF_LABEL_GUTTER
            };
            let leader_x = if on_left {
                label_x + SHELF_LEADER_LENGTH
            } else {
                label_x - SHELF_LEADER_LENGTH
            };
            // Leader line keeps the offset label tied to the exact marker.
            out.push(SceneNode::Line {
                from: shelf.position,
                to: Point::new(leader_x, shelf.position.y),
                stroke: Stroke::new(
                    if shelf_active {
                        theme::LEADER_ACTIVE
                    } else {
                        theme::LEADER_IDLE
                    },
                    0.35,
                ),
                opacity: shelf_opacity,
            });
            out.push(SceneNode::Text {
                position: Point::new(label_x, shelf.position.y),
                content: shelf.code.clone(),
                size: 2.0,
                weight: 600,
                letter_spacing: None,
                fill: theme::LABEL_LIGHT,
                anchor: if on_left {
                    TextAnchor::End
                } else {
                    TextAnchor::Start
                },
                baseline: TextBaseline::Middle,
                opacity: shelf_opacity,
            });
        }
    }
}

fn push_waypoint(
    out: &mut Scene,
    position: Point,
    label: &str,
    fill: Paint,
    stroke: Paint,
    text_fill: Paint,
) {
    out.push(SceneNode::Circle {
        center: position,
        radius: WAYPOINT_RADIUS,
        fill,
        stroke: Some(Stroke::new(stroke, 0.5)),
        opacity: 1.0,
    });
    out.push(SceneNode::Text {
        position,
        content: label.to_string(),
        size: 2.2,
        weight: 700,
        letter_spacing: None,
        fill: text_fill,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Central,
        opacity: 1.0,
    });
}

fn push_legend(out: &mut Scene) {
    const LEGEND_OPACITY: f32 = 0.85;
    out.push(SceneNode::Rect {
        bounds: Bounds::new(70.0, 64.0, 26.0, 6.0),
        corner_radius: 3.0,
        fill: theme::LEGEND_BOX,
        stroke: Some(Stroke::new(theme::LEGEND_STROKE, 0.4)),
        opacity: LEGEND_OPACITY,
    });
    out.push(SceneNode::Circle {
        center: Point::new(74.0, 67.0),
        radius: 0.9,
        fill: theme::LEGEND_DOT,
        stroke: None,
        opacity: LEGEND_OPACITY,
    });
    out.push(SceneNode::Text {
        position: Point::new(76.0, 67.0),
        content: "Shelf".to_string(),
        size: 1.7,
        weight: 400,
        letter_spacing: None,
        fill: theme::LEGEND_TEXT,
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Middle,
        opacity: LEGEND_OPACITY,
    });
    out.push(SceneNode::Rect {
        bounds: Bounds::new(83.0, 66.1, 3.0, 1.8),
        corner_radius: 0.8,
        fill: theme::LEGEND_LANE,
        stroke: None,
        opacity: LEGEND_OPACITY,
    });
    out.push(SceneNode::Text {
        position: Point::new(87.0, 67.0),
        content: "Aisle lane".to_string(),
        size: 1.7,
        weight: 400,
        letter_spacing: None,
        fill: theme::LEGEND_TEXT,
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Middle,
        opacity: LEGEND_OPACITY,
    });
}

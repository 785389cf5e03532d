//! Per-entity styling decision tables.
//!
//! Each rule is a pure function of `(entity, resolved highlight, tier)`.
//! The opacity ladder runs shelf > aisle > zone: the more specific the
//! highlight, the less visual weight its containing zone keeps.

use layout::{Aisle, Shelf, Zone};

use crate::resolver::ResolvedHighlight;
use crate::tier::ViewportTier;

use foundation::GRID_WIDTH;

fn is_zone(zone: &Zone, other: Option<&Zone>) -> bool {
    other.is_some_and(|z| z.name == zone.name)
}

fn zone_owns_label(zone: &Zone, label: &str) -> bool {
    zone.aisle_labels.iter().any(|l| l == label)
}

/// A zone is active when it is the directly resolved zone or the resolved
/// shelf's ancestor zone.
pub fn zone_is_active(zone: &Zone, resolved: &ResolvedHighlight<'_>) -> bool {
    is_zone(zone, resolved.zone) || is_zone(zone, resolved.shelf_zone)
}

pub fn zone_opacity(zone: &Zone, resolved: &ResolvedHighlight<'_>) -> f32 {
    let holds_active_shelf = resolved
        .shelf
        .is_some_and(|shelf| zone_owns_label(zone, &shelf.aisle_label));
    let holds_active_aisle = resolved
        .aisle
        .is_some_and(|aisle| zone_owns_label(zone, &aisle.label));

    if holds_active_shelf {
        0.45
    } else if holds_active_aisle {
        0.55
    } else if zone_is_active(zone, resolved) {
        0.75
    } else {
        0.6
    }
}

pub fn zone_label_visible(
    zone: &Zone,
    resolved: &ResolvedHighlight<'_>,
    tier: ViewportTier,
) -> bool {
    tier == ViewportTier::Desktop || zone_is_active(zone, resolved)
}

/// An aisle is active when it is the directly resolved aisle or the resolved
/// shelf's aisle.
pub fn aisle_is_active(aisle: &Aisle, resolved: &ResolvedHighlight<'_>) -> bool {
    resolved.aisle.is_some_and(|a| a.label == aisle.label)
        || resolved.shelf.is_some_and(|s| s.aisle_label == aisle.label)
}

pub fn aisle_opacity(aisle: &Aisle, resolved: &ResolvedHighlight<'_>) -> f32 {
    if aisle_is_active(aisle, resolved) {
        1.0
    } else if resolved
        .shelf_zone
        .is_some_and(|zone| zone_owns_label(zone, &aisle.label))
    {
        0.55
    } else {
        0.45
    }
}

/// Strict specificity gate: as screen real estate shrinks, only
/// progressively more specific labels survive.
pub fn aisle_label_visible(
    aisle: &Aisle,
    resolved: &ResolvedHighlight<'_>,
    tier: ViewportTier,
) -> bool {
    match tier {
        ViewportTier::Desktop => true,
        ViewportTier::Tablet => aisle_is_active(aisle, resolved),
        ViewportTier::Mobile => resolved.shelf.is_some_and(|s| s.aisle_label == aisle.label),
    }
}

/// Labels anchor on whichever side of the aisle faces away from the grid's
/// horizontal center, keeping them clear of neighboring lanes.
pub fn label_on_left(aisle: &Aisle) -> bool {
    aisle.bounds.mid_x() > GRID_WIDTH / 2.0
}

pub fn shelf_is_active(shelf: &Shelf, resolved: &ResolvedHighlight<'_>) -> bool {
    resolved.shelf.is_some_and(|s| s.code == shelf.code)
}

pub fn shelf_opacity(shelf: &Shelf, resolved: &ResolvedHighlight<'_>) -> f32 {
    if shelf_is_active(shelf, resolved) {
        1.0
    } else {
        0.65
    }
}

/// Shelf codes show for the resolved shelf, or for every shelf at desktop
/// when nothing specific is highlighted. The tablet clause restates the
/// active case and is kept to match the stated rule.
pub fn shelf_label_visible(
    shelf: &Shelf,
    resolved: &ResolvedHighlight<'_>,
    tier: ViewportTier,
) -> bool {
    let active = shelf_is_active(shelf, resolved);
    active
        || (tier == ViewportTier::Desktop && resolved.shelf.is_none())
        || (tier == ViewportTier::Tablet && active)
}

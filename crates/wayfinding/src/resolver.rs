use layout::{Aisle, Shelf, StoreLayout, Zone};

/// Externally supplied highlight request: free-text zone/aisle/shelf names,
/// each optional. Values are trimmed and case-folded before lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightHint {
    pub zone: Option<String>,
    pub aisle: Option<String>,
    pub shelf: Option<String>,
}

impl HighlightHint {
    pub fn shelf(code: impl Into<String>) -> Self {
        Self {
            shelf: Some(code.into()),
            ..Self::default()
        }
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Exact (case-insensitive) zone lookup; no partial or fuzzy matching.
pub fn find_zone<'a>(layout: &'a StoreLayout, name: Option<&str>) -> Option<&'a Zone> {
    let needle = normalize(name)?;
    layout
        .zones()
        .iter()
        .find(|zone| zone.name.to_lowercase() == needle)
}

pub fn find_aisle<'a>(layout: &'a StoreLayout, label: Option<&str>) -> Option<&'a Aisle> {
    let needle = normalize(label)?;
    layout
        .aisles()
        .iter()
        .find(|aisle| aisle.label.to_lowercase() == needle)
}

pub fn find_shelf<'a>(layout: &'a StoreLayout, code: Option<&str>) -> Option<&'a Shelf> {
    let needle = normalize(code)?;
    layout
        .shelves()
        .iter()
        .find(|shelf| shelf.code.to_lowercase() == needle)
}

/// Ancestor derivation: the zone whose aisle set contains the shelf's aisle.
pub fn zone_of_shelf<'a>(layout: &'a StoreLayout, shelf: &Shelf) -> Option<&'a Zone> {
    layout
        .zones()
        .iter()
        .find(|zone| zone.aisle_labels.iter().any(|l| l == &shelf.aisle_label))
}

/// Catalog entities a hint resolved to.
///
/// `zone`, `aisle`, and `shelf` come independently from their hint fields.
/// `shelf_zone` is the resolved shelf's ancestor zone, derived separately so
/// a shelf-only hint still lights up its containing zone; the hint's own
/// zone field and the shelf's implied zone may legitimately differ, and both
/// are honored.
#[derive(Debug, Copy, Clone, Default)]
pub struct ResolvedHighlight<'a> {
    pub zone: Option<&'a Zone>,
    pub aisle: Option<&'a Aisle>,
    pub shelf: Option<&'a Shelf>,
    pub shelf_zone: Option<&'a Zone>,
}

impl<'a> ResolvedHighlight<'a> {
    pub fn resolve(layout: &'a StoreLayout, hint: &HighlightHint) -> Self {
        let zone = find_zone(layout, hint.zone.as_deref());
        let aisle = find_aisle(layout, hint.aisle.as_deref());
        let shelf = find_shelf(layout, hint.shelf.as_deref());
        let shelf_zone = shelf.and_then(|s| zone_of_shelf(layout, s));
        Self {
            zone,
            aisle,
            shelf,
            shelf_zone,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.zone.is_none() && self.aisle.is_none() && self.shelf.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{HighlightHint, ResolvedHighlight, find_shelf, find_zone, zone_of_shelf};
    use layout::StoreLayout;

    #[test]
    fn lookups_ignore_case_and_whitespace() {
        let layout = StoreLayout::demo_store().unwrap();
        let a = find_shelf(&layout, Some(" s1-L1 ")).unwrap();
        let b = find_shelf(&layout, Some("S1-L1")).unwrap();
        assert_eq!(a.code, b.code);
        assert!(find_zone(&layout, Some("dairy")).is_some());
    }

    #[test]
    fn empty_and_unknown_inputs_resolve_to_none() {
        let layout = StoreLayout::demo_store().unwrap();
        assert!(find_shelf(&layout, None).is_none());
        assert!(find_shelf(&layout, Some("   ")).is_none());
        assert!(find_shelf(&layout, Some("Z9-L9")).is_none());

        let resolved = ResolvedHighlight::resolve(&layout, &HighlightHint::default());
        assert!(resolved.is_empty());
        assert!(resolved.shelf_zone.is_none());
    }

    #[test]
    fn shelf_only_hint_propagates_to_ancestor_zone() {
        let layout = StoreLayout::demo_store().unwrap();
        let resolved = ResolvedHighlight::resolve(&layout, &HighlightHint::shelf("D1-L1"));
        assert!(resolved.zone.is_none());
        assert_eq!(resolved.shelf.unwrap().code, "D1-L1");
        assert_eq!(resolved.shelf_zone.unwrap().name, "Dairy");
    }

    #[test]
    fn explicit_zone_and_shelf_ancestor_are_tracked_separately() {
        let layout = StoreLayout::demo_store().unwrap();
        let hint = HighlightHint {
            zone: Some("Snacks".to_string()),
            aisle: None,
            shelf: Some("D1-L1".to_string()),
        };
        let resolved = ResolvedHighlight::resolve(&layout, &hint);
        assert_eq!(resolved.zone.unwrap().name, "Snacks");
        assert_eq!(resolved.shelf_zone.unwrap().name, "Dairy");
    }

    #[test]
    fn ancestor_lookup_walks_zone_aisle_sets() {
        let layout = StoreLayout::demo_store().unwrap();
        let shelf = find_shelf(&layout, Some("B2-R1")).unwrap();
        assert_eq!(zone_of_shelf(&layout, shelf).unwrap().name, "Beverages");
    }
}

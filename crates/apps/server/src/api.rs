use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use layout::StoreLayout;
use scene::svg::write_svg;
use wayfinding::{render_map, HighlightHint};

use crate::products::{Category, Product, ProductStore};
use crate::AppState;

pub async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

#[derive(Debug, Serialize)]
struct ProductSummary<'a> {
    id: &'a str,
    name: &'a str,
    price_cents: u32,
    category: Category,
}

pub async fn list_products(State(state): State<AppState>) -> Response {
    let products: Vec<ProductSummary<'_>> = state
        .products
        .list()
        .into_iter()
        .map(|p: &Product| ProductSummary {
            id: &p.id,
            name: &p.name,
            price_cents: p.price_cents,
            category: p.category,
        })
        .collect();
    Json(json!({ "products": products })).into_response()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationResponse {
    pub product: String,
    pub zone: String,
    pub aisle: String,
    pub shelf: String,
    pub directions: Option<String>,
}

/// Walks a product's shelf assignment up the layout hierarchy. `None` when
/// the product is unknown, unplaced, or its shelf no longer resolves.
pub fn locate_product(
    layout: &StoreLayout,
    store: &dyn ProductStore,
    id: &str,
) -> Option<LocationResponse> {
    let product = store.get(id)?;
    let code = product.shelf_code.as_deref()?;
    let shelf = wayfinding::resolver::find_shelf(layout, Some(code))?;
    let aisle = wayfinding::resolver::find_aisle(layout, Some(shelf.aisle_label.as_str()))?;
    let zone = wayfinding::resolver::zone_of_shelf(layout, shelf)?;
    Some(LocationResponse {
        product: product.name.clone(),
        zone: zone.name.clone(),
        aisle: aisle.label.clone(),
        shelf: shelf.code.clone(),
        directions: product.directions.clone(),
    })
}

pub async fn product_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match locate_product(&state.layout, state.products.as_ref(), &id) {
        Some(location) => Json(location).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "product not found" })),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct ResolveZoneRequest {
    #[serde(rename = "beaconId")]
    pub beacon_id: Option<String>,
}

pub fn zone_for_beacon<'a>(layout: &'a StoreLayout, beacon_id: &str) -> Option<&'a str> {
    layout
        .zones()
        .iter()
        .find(|zone| zone.beacon_id.as_deref() == Some(beacon_id))
        .map(|zone| zone.name.as_str())
}

pub async fn resolve_zone(
    State(state): State<AppState>,
    Json(request): Json<ResolveZoneRequest>,
) -> Response {
    let beacon = request
        .beacon_id
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty());
    let Some(beacon) = beacon else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "beaconId is required" })),
        )
            .into_response();
    };
    // An unknown beacon is not an error; it resolves to a null zone.
    Json(json!({ "zone": zone_for_beacon(&state.layout, beacon) })).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct MapQuery {
    pub zone: Option<String>,
    pub aisle: Option<String>,
    pub shelf: Option<String>,
    pub height: Option<f64>,
}

pub async fn map_svg(State(state): State<AppState>, Query(query): Query<MapQuery>) -> Response {
    let hint = HighlightHint {
        zone: query.zone,
        aisle: query.aisle,
        shelf: query.shelf,
    };
    // Missing height classifies as the mobile tier, the conservative default.
    let scene = render_map(&state.layout, &hint, query.height.unwrap_or(0.0));
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        write_svg(&scene),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::{locate_product, zone_for_beacon, LocationResponse};
    use crate::products::InMemoryProductStore;
    use layout::StoreLayout;
    use pretty_assertions::assert_eq;

    #[test]
    fn locates_a_placed_product_through_the_hierarchy() {
        let layout = StoreLayout::demo_store().unwrap();
        let store = InMemoryProductStore::demo_catalog();
        let location = locate_product(&layout, &store, "sparkling-water").unwrap();
        assert_eq!(
            location,
            LocationResponse {
                product: "Sparkling Citrus Water".to_string(),
                zone: "Beverages".to_string(),
                aisle: "B1".to_string(),
                shelf: "B1-L1".to_string(),
                directions: Some("Aisle B1, left side, near the front cooler.".to_string()),
            }
        );
    }

    #[test]
    fn unknown_and_unplaced_products_have_no_location() {
        let layout = StoreLayout::demo_store().unwrap();
        let store = InMemoryProductStore::demo_catalog();
        assert!(locate_product(&layout, &store, "no-such-sku").is_none());
        // In the catalog, but no shelf assignment yet.
        assert!(locate_product(&layout, &store, "laundry-pods").is_none());
    }

    #[test]
    fn beacon_ids_resolve_to_zone_names() {
        let layout = StoreLayout::demo_store().unwrap();
        assert_eq!(zone_for_beacon(&layout, "ble-zone-dairy"), Some("Dairy"));
        assert_eq!(zone_for_beacon(&layout, "ble-unknown"), None);
    }
}

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use layout::StoreLayout;

mod api;
mod products;

use products::InMemoryProductStore;

#[derive(Clone)]
struct AppState {
    layout: Arc<StoreLayout>,
    products: Arc<InMemoryProductStore>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // An invalid layout is a data bug; never serve renders from one.
    let layout = match StoreLayout::demo_store() {
        Ok(layout) => Arc::new(layout),
        Err(err) => {
            error!("store layout failed validation: {err}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = env::var("STOREFRONT_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:9200".to_string())
        .parse()
        .expect("invalid STOREFRONT_ADDR");

    let state = AppState {
        layout,
        products: Arc::new(InMemoryProductStore::demo_catalog()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/healthz", get(api::healthz))
        .route("/api/products", get(api::list_products))
        .route("/api/products/:id/location", get(api::product_location))
        .route("/api/resolve-zone", post(api::resolve_zone))
        .route("/api/map", get(api::map_svg))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("storefront server listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    catalog::Catalog,
    middleware::{make_span_with_request_id, request_id_middleware},
};

pub mod guide;
pub mod products;
pub mod routine;

/// State shared by all handlers
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// When set, every request draws products from a generator with this seed
    pub rng_seed: Option<u64>,
}

impl AppState {
    pub fn new(catalog: Catalog, rng_seed: Option<u64>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            rng_seed,
        }
    }

    /// Random source for a single request
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/routine", post(routine::recommend))
        .route("/products/search", get(products::search))
        .route("/products/:id", get(products::get_product))
        .route("/skin-types", get(guide::skin_types))
        .route("/concerns", get(guide::concerns))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "products": state.catalog.len() })),
    )
}

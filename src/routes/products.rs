use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::ProductDetails,
    routes::AppState,
    services::search::{product_details, search_products},
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

/// Handler for product search endpoint
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<ProductDetails>>> {
    let products = search_products(&state.catalog, &params.q)?;
    Ok(Json(products))
}

/// Handler for single product lookup
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ProductDetails>> {
    let product = product_details(&state.catalog, &product_id)?;
    Ok(Json(product))
}

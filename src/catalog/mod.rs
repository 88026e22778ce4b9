//! Product catalog
//!
//! The catalog is read once at start-up from a pluggable source and then
//! shared read-only between requests.

use std::collections::HashSet;

use crate::{error::AppResult, models::Product};

pub mod csv_source;

pub use csv_source::CsvCatalogSource;

/// Where catalog products come from
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every product from the source
    async fn load(&self) -> AppResult<Vec<Product>>;

    /// Human-readable description for logging
    fn describe(&self) -> String;
}

/// In-memory source, useful for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} products)", self.products.len())
    }
}

/// Immutable product table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads the catalog from a source, logging what was found
    pub async fn load_from(source: &dyn CatalogSource) -> AppResult<Self> {
        let products = source.load().await?;
        let catalog = Self::from_products(products);

        let without_step = catalog.products.iter().filter(|p| p.step.is_none()).count();
        tracing::info!(
            source = %source.describe(),
            products = catalog.len(),
            without_step,
            "Loaded product catalog"
        );

        Ok(catalog)
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.product_id.as_str()) {
                tracing::warn!(product_id = %product.product_id, "Duplicate product id in catalog");
            }
        }

        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with the given id
    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }
}

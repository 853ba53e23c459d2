//! Catalog source factory

use shared::CatalogProduct;

use crate::{CatalogConfig, FixtureCatalog, HttpCatalog};

/// Factory for catalog sources
pub struct ShelfClient;

impl ShelfClient {
    /// Network source against the live catalog endpoint
    pub fn network(config: &CatalogConfig) -> HttpCatalog {
        HttpCatalog::new(config)
    }

    /// In-memory source for tests and offline demos
    pub fn fixture(products: Vec<CatalogProduct>) -> FixtureCatalog {
        FixtureCatalog::new(products)
    }
}

//! In-memory catalog fixture
//!
//! Same paging and search contract as the live endpoint (case-insensitive
//! title substring match, `None` past the last page); serves tests and
//! offline demos.

use async_trait::async_trait;
use shared::{CatalogProduct, CatalogQuery};
use shelf_core::{CatalogPage, CatalogSource, SourceError};

/// Fixture catalog over a fixed product snapshot
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    products: Vec<CatalogProduct>,
}

impl FixtureCatalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    fn page_of(&self, query: &CatalogQuery) -> CatalogPage {
        let needle = query.search_text().to_lowercase();
        let matched: Vec<&CatalogProduct> = self
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
            .collect();

        let start = query.page.saturating_sub(1) as usize * query.limit as usize;
        if start >= matched.len() {
            return None;
        }
        Some(
            matched
                .into_iter()
                .skip(start)
                .take(query.limit as usize)
                .cloned()
                .collect(),
        )
    }
}

#[async_trait]
impl CatalogSource for FixtureCatalog {
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CatalogPage, SourceError> {
        Ok(self.page_of(query))
    }
}

//! Catalog source trait
//!
//! The one network seam of the widget. `shelf-client` provides the HTTP
//! implementation and an in-memory fixture.

use async_trait::async_trait;
use shared::{CatalogProduct, CatalogQuery};
use thiserror::Error;

/// One page of catalog results; `None` is the end-of-pagination sentinel
/// (the endpoint answers JSON `null` once results are exhausted)
pub type CatalogPage = Option<Vec<CatalogProduct>>;

/// Catalog fetch failures
///
/// Status codes are not disambiguated further; every non-2xx answer is the
/// same kind of failure to the picker.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("catalog transport error: {0}")]
    Transport(String),

    #[error("catalog returned status {0}")]
    Status(u16),

    #[error("failed to decode catalog response: {0}")]
    Decode(String),
}

/// Paginated, searchable product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of products matching the query
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CatalogPage, SourceError>;
}

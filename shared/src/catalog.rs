//! Catalog query types
//!
//! Parameters for one page of the catalog search endpoint. The endpoint
//! answers with a plain product array, or JSON `null` once pagination is
//! exhausted; there is no envelope to model.

use serde::{Deserialize, Serialize};

/// Default page size for catalog searches
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Parameters for one catalog search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Search text; `None` lists the unfiltered catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Page number (from 1)
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl CatalogQuery {
    /// First page of the unfiltered catalog
    pub fn first_page() -> Self {
        Self {
            search: None,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Set the search text (empty text means unfiltered)
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let text = search.into();
        self.search = if text.is_empty() { None } else { Some(text) };
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Same search and limit, next page
    pub fn next_page(&self) -> Self {
        Self {
            search: self.search.clone(),
            page: self.page + 1,
            limit: self.limit,
        }
    }

    /// Search text as typed ("" when unfiltered)
    pub fn search_text(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::first_page()
    }
}

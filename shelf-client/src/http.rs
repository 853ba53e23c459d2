//! HTTP catalog source
//!
//! GET `{base}/products/search?search&page&limit` with the `x-api-key`
//! header. The endpoint answers a JSON product array, or JSON `null` once
//! pagination is exhausted.

use async_trait::async_trait;
use shared::CatalogQuery;
use shelf_core::{CatalogPage, CatalogSource, SourceError};
use tracing::debug;

use crate::{CatalogConfig, ClientError, ClientResult};

/// Network catalog client
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCatalog {
    /// Create a new catalog client from configuration
    pub fn new(config: &CatalogConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    async fn get_page(&self, query: &CatalogQuery) -> ClientResult<CatalogPage> {
        let url = format!("{}/products/search", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .header("x-api-key", &self.api_key)
            .query(&[("page", query.page), ("limit", query.limit)]);

        // Empty search is omitted entirely, not sent as `search=`
        if let Some(search) = &query.search {
            request = request.query(&[("search", search)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let page: CatalogPage = serde_json::from_str(&body)?;
        if page.is_none() {
            debug!(page = query.page, "catalog reports no further results");
        }
        Ok(page)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CatalogPage, SourceError> {
        self.get_page(query).await.map_err(Into::into)
    }
}

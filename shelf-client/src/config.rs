//! Catalog client configuration

use shared::DEFAULT_PAGE_LIMIT;

/// Configuration for connecting to the store catalog
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base URL (e.g., "https://store.example.com/api")
    pub base_url: String,

    /// API key sent in the `x-api-key` header
    pub api_key: String,

    /// Items per fetched page
    pub page_limit: u32,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            page_limit: DEFAULT_PAGE_LIMIT,
            timeout_ms: 30_000,
        }
    }

    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SHELF_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            api_key: std::env::var("SHELF_API_KEY").unwrap_or_default(),
            page_limit: std::env::var("SHELF_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_LIMIT),
            timeout_ms: std::env::var("SHELF_HTTP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
        }
    }

    /// Set the page size
    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = limit;
        self
    }

    /// Set the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::new("http://localhost:3000", "key");
        assert_eq!(config.page_limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(config.timeout_ms, 30_000);
    }

    #[test]
    fn test_builders() {
        let config = CatalogConfig::default().with_page_limit(25).with_timeout_ms(5_000);
        assert_eq!(config.page_limit, 25);
        assert_eq!(config.timeout_ms, 5_000);
    }
}

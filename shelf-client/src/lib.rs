//! Catalog fetch collaborator for the shelf widget
//!
//! Implements the core's `CatalogSource` trait two ways: `HttpCatalog`
//! against the live `products/search` endpoint and `FixtureCatalog` over an
//! in-memory snapshot, both built through the `ShelfClient` factory. The
//! `PickerDriver` couples a picker session with a source and the tokio
//! timer.

pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod fixture;
pub mod http;

// Re-exports
pub use client::ShelfClient;
pub use config::CatalogConfig;
pub use driver::PickerDriver;
pub use error::{ClientError, ClientResult};
pub use fixture::FixtureCatalog;
pub use http::HttpCatalog;

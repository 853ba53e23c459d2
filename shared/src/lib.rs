//! Shared types for the Shelf widget
//!
//! Common types used across the core state engine and the catalog client:
//! catalog snapshot models, discount types, and catalog query parameters.

pub mod catalog;
pub mod models;

// Re-exports
pub use catalog::{CatalogQuery, DEFAULT_PAGE_LIMIT};
pub use models::{CatalogProduct, CatalogVariant, Discount, DiscountKind, ImageRef, ProductInfo};
pub use serde::{Deserialize, Serialize};

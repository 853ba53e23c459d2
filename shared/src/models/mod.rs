//! Data models
//!
//! Shared between the shelf state engine and the catalog client (via API).
//! Catalog IDs are `i64` (externally assigned by the store backend).

pub mod discount;
pub mod image_ref;
pub mod product;

// Re-exports
pub use discount::*;
pub use image_ref::*;
pub use product::*;

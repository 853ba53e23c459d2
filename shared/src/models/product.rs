//! Catalog Product Model

use serde::{Deserialize, Serialize};

use super::image_ref::ImageRef;

/// Product snapshot fetched from the store catalog
///
/// Immutable once fetched; the widget references it during selection and
/// copies the flattened fields into a slot when a pick is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Externally assigned catalog ID
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    /// Catalog-defined variant order (meaningful, preserved everywhere)
    #[serde(default)]
    pub variants: Vec<CatalogVariant>,
}

impl CatalogProduct {
    /// Flattened copy of the product fields, without the variants
    pub fn info(&self) -> ProductInfo {
        ProductInfo {
            id: self.id,
            title: self.title.clone(),
            image: self.image.clone(),
        }
    }

    /// IDs of every variant, in catalog order
    pub fn variant_ids(&self) -> Vec<i64> {
        self.variants.iter().map(|v| v.id).collect()
    }

    /// Look up one variant by ID
    pub fn variant(&self, variant_id: i64) -> Option<&CatalogVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}

/// Product variant snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogVariant {
    /// Unique within the owning product
    pub id: i64,
    pub title: String,
    pub price: f64,
    /// Signed on purpose: live feeds report oversold stock as a negative count
    pub inventory_quantity: i32,
}

impl CatalogVariant {
    /// Stock count for display
    ///
    /// Oversold feeds come back negative; the magnitude is shown, never an error.
    pub fn available_units(&self) -> u32 {
        self.inventory_quantity.unsigned_abs()
    }
}

/// Flattened product fields stored inside a filled shelf slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

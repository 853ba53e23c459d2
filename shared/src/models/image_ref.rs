//! Image Reference Model

use serde::{Deserialize, Serialize};

/// Reference to a product image hosted by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

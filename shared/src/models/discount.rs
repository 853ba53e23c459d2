//! Discount Model

use serde::{Deserialize, Serialize};

/// Discount kind enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// Percentage off the product price
    #[default]
    PercentOff,
    /// Flat amount off the product price
    FlatOff,
}

impl DiscountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountKind::PercentOff => "% off",
            DiscountKind::FlatOff => "flat off",
        }
    }
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-slot discount
///
/// The value is stored verbatim: no range check is applied, negative and
/// out-of-range percentages included. Validation belongs to the backend
/// that consumes the assembled shelf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Discount {
    pub value: f64,
    pub kind: DiscountKind,
}

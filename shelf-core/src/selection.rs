//! Selection reducer
//!
//! Ordered set of checked product/variant ids for one picker session.
//! Invariant: a variant may only be present while its parent product is
//! present. Checking a bare product selects all of its variants; unchecking
//! the last variant of a product also unchecks the product.

use serde::{Deserialize, Serialize};

/// One checked entry in the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckedId {
    Product { product_id: i64 },
    Variant { product_id: i64, variant_id: i64 },
}

impl CheckedId {
    /// Owning product id (the product's own id for product entries)
    pub fn product_id(&self) -> i64 {
        match self {
            CheckedId::Product { product_id } => *product_id,
            CheckedId::Variant { product_id, .. } => *product_id,
        }
    }

    pub fn is_product(&self) -> bool {
        matches!(self, CheckedId::Product { .. })
    }
}

/// The picker's in-progress selection
///
/// Entries keep first-seen order; the merge step derives its output order
/// from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionSet {
    entries: Vec<CheckedId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection pre-seeded from an already filled slot: the product plus
    /// the variants the slot retained
    pub fn seeded(product_id: i64, variant_ids: &[i64]) -> Self {
        let mut set = Self::new();
        set.toggle_product(product_id, variant_ids);
        set
    }

    /// Toggle a product checkbox
    ///
    /// Checking on appends the product and every listed variant; checking
    /// off removes the product and all of its variants.
    pub fn toggle_product(&mut self, product_id: i64, variant_ids: &[i64]) {
        if self.contains_product(product_id) {
            self.entries.retain(|id| id.product_id() != product_id);
        } else {
            self.entries.push(CheckedId::Product { product_id });
            for &variant_id in variant_ids {
                self.entries.push(CheckedId::Variant {
                    product_id,
                    variant_id,
                });
            }
        }
        self.debug_assert_no_orphans();
    }

    /// Toggle a variant checkbox
    ///
    /// Checking on also checks the parent product if it is not yet selected.
    /// Checking the last remaining variant off also unchecks the product.
    pub fn toggle_variant(&mut self, product_id: i64, variant_id: i64) {
        let target = CheckedId::Variant {
            product_id,
            variant_id,
        };
        if let Some(pos) = self.entries.iter().position(|id| *id == target) {
            self.entries.remove(pos);
            let any_sibling_left = self
                .entries
                .iter()
                .any(|id| !id.is_product() && id.product_id() == product_id);
            if !any_sibling_left {
                self.entries
                    .retain(|id| !(id.is_product() && id.product_id() == product_id));
            }
        } else {
            if !self.contains_product(product_id) {
                self.entries.push(CheckedId::Product { product_id });
            }
            self.entries.push(target);
        }
        self.debug_assert_no_orphans();
    }

    pub fn contains_product(&self, product_id: i64) -> bool {
        self.entries
            .iter()
            .any(|id| id.is_product() && id.product_id() == product_id)
    }

    pub fn contains_variant(&self, product_id: i64, variant_id: i64) -> bool {
        self.entries.contains(&CheckedId::Variant {
            product_id,
            variant_id,
        })
    }

    /// Number of selected products (footer display)
    pub fn product_count(&self) -> usize {
        self.entries.iter().filter(|id| id.is_product()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &CheckedId> {
        self.entries.iter()
    }

    fn debug_assert_no_orphans(&self) {
        debug_assert!(
            self.entries.iter().all(|id| match id {
                CheckedId::Product { .. } => true,
                CheckedId::Variant { product_id, .. } => self.contains_product(*product_id),
            }),
            "selection contains a variant without its parent product"
        );
    }
}

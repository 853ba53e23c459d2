//! Flat-to-nested merge
//!
//! Converts the picker's flat checked-id sequence plus the loaded catalog
//! window into ordered product picks. A checked product that is no longer in
//! the window (catalog mutated between selection and confirmation) is a
//! data-consistency error: the group is skipped and counted, never silently
//! dropped.

use shared::{CatalogProduct, CatalogVariant, ProductInfo};
use tracing::warn;

use crate::selection::{CheckedId, SelectionSet};

/// One confirmed pick: flattened product fields plus the chosen variants
#[derive(Debug, Clone, PartialEq)]
pub struct PickedProduct {
    pub product: ProductInfo,
    /// Chosen variants, in catalog order
    pub variants: Vec<CatalogVariant>,
}

/// Result of merging a selection against the loaded catalog window
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Picks in first-seen product order of the selection
    pub picks: Vec<PickedProduct>,
    /// Number of selected products that could not be resolved
    pub skipped: usize,
}

/// Merge the selection into nested picks
///
/// Grouping preserves the first-seen product order of the flat sequence.
/// Each pick's variants follow catalog order, so they are always a
/// subsequence of the catalog product's variant list.
pub fn merge_selection(selection: &SelectionSet, catalog: &[CatalogProduct]) -> MergeOutcome {
    // Group checked ids by product, first-seen order
    let mut groups: Vec<(i64, Vec<i64>)> = Vec::new();
    for id in selection.iter() {
        let product_id = id.product_id();
        if !groups.iter().any(|(pid, _)| *pid == product_id) {
            groups.push((product_id, Vec::new()));
        }
        if let CheckedId::Variant { variant_id, .. } = id {
            if let Some((_, variant_ids)) = groups.iter_mut().find(|(pid, _)| *pid == product_id) {
                variant_ids.push(*variant_id);
            }
        }
    }

    let mut picks = Vec::with_capacity(groups.len());
    let mut skipped = 0;
    for (product_id, variant_ids) in groups {
        let Some(product) = catalog.iter().find(|p| p.id == product_id) else {
            warn!(
                product_id,
                "selected product missing from loaded catalog, skipping group"
            );
            skipped += 1;
            continue;
        };

        for variant_id in &variant_ids {
            if product.variant(*variant_id).is_none() {
                warn!(
                    product_id,
                    variant_id, "selected variant missing from loaded catalog"
                );
            }
        }

        let variants: Vec<CatalogVariant> = product
            .variants
            .iter()
            .filter(|v| variant_ids.contains(&v.id))
            .cloned()
            .collect();
        picks.push(PickedProduct {
            product: product.info(),
            variants,
        });
    }

    MergeOutcome { picks, skipped }
}

//! Assembled list model
//!
//! The ordered slot list the operator builds: each slot is empty or holds a
//! product with a variant subset and an optional discount. Slot ids come
//! from a per-shelf monotonic counter so they stay unique and stable across
//! reorders. The shelf never becomes empty: removing the last slot re-seeds
//! a fresh empty one.

mod drag;
pub use drag::{DragEnd, DragHandle, DragOutcome};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use shared::{CatalogVariant, Discount, DiscountKind, ProductInfo};

use crate::merge::PickedProduct;

/// Shelf errors
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("slot index out of range: {0}")]
    SlotOutOfRange(usize),

    #[error("slot not found: {0}")]
    SlotNotFound(SlotId),

    #[error("slot {0} is empty")]
    EmptySlot(usize),

    #[error("variant {variant_id} not found in slot {slot_index}")]
    VariantNotFound { slot_index: usize, variant_id: i64 },
}

/// Stable slot identity, used as the drag handle
///
/// Survives reordering; does not survive slot deletion or replacement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SlotId(u64);

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot content state: a placeholder row, or a picked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotContent {
    Empty,
    Filled {
        product: ProductInfo,
        /// Chosen variants; order is user-controlled per slot
        variants: Vec<CatalogVariant>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        discount: Option<Discount>,
    },
}

/// One position in the assembled list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub content: SlotContent,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self.content, SlotContent::Empty)
    }

    /// Product id for a filled slot
    pub fn product_id(&self) -> Option<i64> {
        match &self.content {
            SlotContent::Filled { product, .. } => Some(product.id),
            SlotContent::Empty => None,
        }
    }
}

/// The assembled product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    slots: Vec<Slot>,
    next_slot_id: u64,
}

impl Default for Shelf {
    fn default() -> Self {
        Self::new()
    }
}

impl Shelf {
    /// New shelf with a single empty slot
    pub fn new() -> Self {
        let mut shelf = Self {
            slots: Vec::new(),
            next_slot_id: 0,
        };
        shelf.push_empty();
        shelf
    }

    fn alloc_slot_id(&mut self) -> SlotId {
        let id = SlotId(self.next_slot_id);
        self.next_slot_id += 1;
        id
    }

    fn push_empty(&mut self) -> SlotId {
        let id = self.alloc_slot_id();
        self.slots.push(Slot {
            id,
            content: SlotContent::Empty,
        });
        id
    }

    /// Re-seed the never-empty floor
    fn reseed_if_empty(&mut self) {
        if self.slots.is_empty() {
            let id = self.push_empty();
            debug!(slot_id = %id, "shelf emptied, re-seeding an empty slot");
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Current position of a slot
    pub fn slot_index(&self, slot_id: SlotId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == slot_id)
    }

    /// Product ids of every filled slot (feeds the picker exclusion filter)
    pub fn product_ids(&self) -> Vec<i64> {
        self.slots.iter().filter_map(Slot::product_id).collect()
    }

    /// Append a fresh empty slot
    pub fn add_slot(&mut self) -> SlotId {
        self.push_empty()
    }

    /// Replace the slot at `slot_index` with one filled slot per pick
    ///
    /// A batch of N picks expands the list by N-1; an empty batch removes
    /// the slot (subject to the never-empty floor).
    pub fn insert_picks(
        &mut self,
        slot_index: usize,
        picks: Vec<PickedProduct>,
    ) -> Result<(), ShelfError> {
        if slot_index >= self.slots.len() {
            return Err(ShelfError::SlotOutOfRange(slot_index));
        }
        let replacements: Vec<Slot> = picks
            .into_iter()
            .map(|pick| Slot {
                id: self.alloc_slot_id(),
                content: SlotContent::Filled {
                    product: pick.product,
                    variants: pick.variants,
                    discount: None,
                },
            })
            .collect();
        self.slots.splice(slot_index..=slot_index, replacements);
        self.reseed_if_empty();
        Ok(())
    }

    /// Delete a slot; the last slot is replaced by a fresh empty one
    pub fn remove_slot(&mut self, slot_id: SlotId) -> Result<(), ShelfError> {
        let index = self
            .slot_index(slot_id)
            .ok_or(ShelfError::SlotNotFound(slot_id))?;
        self.slots.remove(index);
        self.reseed_if_empty();
        Ok(())
    }

    /// Remove one variant from one slot
    ///
    /// The slot survives even when its variant list reaches zero.
    pub fn remove_variant(&mut self, slot_index: usize, variant_id: i64) -> Result<(), ShelfError> {
        let slot = self
            .slots
            .get_mut(slot_index)
            .ok_or(ShelfError::SlotOutOfRange(slot_index))?;
        let SlotContent::Filled { variants, .. } = &mut slot.content else {
            return Err(ShelfError::EmptySlot(slot_index));
        };
        let pos = variants
            .iter()
            .position(|v| v.id == variant_id)
            .ok_or(ShelfError::VariantNotFound {
                slot_index,
                variant_id,
            })?;
        variants.remove(pos);
        Ok(())
    }

    /// Move the slot `from` to the position currently held by `to`
    ///
    /// Returns whether anything moved; unknown ids and `from == to` are
    /// no-ops.
    pub fn reorder_slots(&mut self, from: SlotId, to: SlotId) -> bool {
        if from == to {
            return false;
        }
        let (Some(old_index), Some(new_index)) = (self.slot_index(from), self.slot_index(to))
        else {
            return false;
        };
        let slot = self.slots.remove(old_index);
        self.slots.insert(new_index, slot);
        true
    }

    /// Move a variant within one slot's variant sequence
    pub fn reorder_variants(
        &mut self,
        slot_index: usize,
        from_variant: i64,
        to_variant: i64,
    ) -> bool {
        if from_variant == to_variant {
            return false;
        }
        let Some(slot) = self.slots.get_mut(slot_index) else {
            return false;
        };
        let SlotContent::Filled { variants, .. } = &mut slot.content else {
            return false;
        };
        let (Some(old_index), Some(new_index)) = (
            variants.iter().position(|v| v.id == from_variant),
            variants.iter().position(|v| v.id == to_variant),
        ) else {
            return false;
        };
        let variant = variants.remove(old_index);
        variants.insert(new_index, variant);
        true
    }

    /// Set the discount value on a filled slot
    ///
    /// Stored verbatim, negative and out-of-range values included; range
    /// validation belongs to the backend consuming the shelf.
    pub fn set_discount_value(&mut self, slot_index: usize, value: f64) -> Result<(), ShelfError> {
        self.discount_mut(slot_index)?.value = value;
        Ok(())
    }

    /// Set the discount kind on a filled slot
    pub fn set_discount_kind(
        &mut self,
        slot_index: usize,
        kind: DiscountKind,
    ) -> Result<(), ShelfError> {
        self.discount_mut(slot_index)?.kind = kind;
        Ok(())
    }

    /// First edit materializes the default discount (0, percent off)
    fn discount_mut(&mut self, slot_index: usize) -> Result<&mut Discount, ShelfError> {
        let slot = self
            .slots
            .get_mut(slot_index)
            .ok_or(ShelfError::SlotOutOfRange(slot_index))?;
        let SlotContent::Filled { discount, .. } = &mut slot.content else {
            return Err(ShelfError::EmptySlot(slot_index));
        };
        Ok(discount.get_or_insert_with(Discount::default))
    }
}

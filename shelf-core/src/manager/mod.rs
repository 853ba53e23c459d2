//! Shelf coordinator
//!
//! Owns the shelf and at most one open picker session. The modal
//! collaborator's lifecycle is the `Option<PickerSession>`: opening the
//! picker seeds a session from the targeted slot, cancel discards it,
//! confirm merges the selection and splices the picks into the shelf.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use shared::DiscountKind;

use crate::picker::{FetchTicket, PickerError, PickerSession};
use crate::shelf::{DragEnd, DragOutcome, Shelf, ShelfError, SlotContent, SlotId};

/// Coordinator errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("a picker session is already open")]
    PickerAlreadyOpen,

    #[error("no picker session is open")]
    PickerNotOpen,

    #[error(transparent)]
    Shelf(#[from] ShelfError),

    #[error(transparent)]
    Picker(#[from] PickerError),
}

/// What a confirmed pick did to the shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmSummary {
    /// Slots spliced into the shelf
    pub inserted: usize,
    /// Selected products dropped as unresolvable (data-consistency errors)
    pub skipped: usize,
}

/// The widget root: assembled shelf plus the optional open picker
#[derive(Debug, Default)]
pub struct ShelfManager {
    shelf: Shelf,
    session: Option<PickerSession>,
}

impl ShelfManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    pub fn session(&self) -> Option<&PickerSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PickerSession> {
        self.session.as_mut()
    }

    /// Open the picker for the slot at `slot_index`
    ///
    /// Seeds the selection from the slot when it is already filled, hides
    /// products filled elsewhere on the shelf, and returns the ticket for
    /// the immediate first fetch.
    pub fn open_picker(&mut self, slot_index: usize) -> Result<FetchTicket, ManagerError> {
        if self.session.is_some() {
            return Err(ManagerError::PickerAlreadyOpen);
        }
        let slot = self
            .shelf
            .slot(slot_index)
            .ok_or(ShelfError::SlotOutOfRange(slot_index))?;
        let editing = match &slot.content {
            SlotContent::Filled {
                product, variants, ..
            } => Some((product.id, variants.iter().map(|v| v.id).collect())),
            SlotContent::Empty => None,
        };
        let excluded: HashSet<i64> = self.shelf.product_ids().into_iter().collect();

        let mut session = PickerSession::open(slot_index, excluded, editing);
        let ticket = session.initial_ticket();
        self.session = Some(session);
        debug!(slot_index, "picker opened");
        Ok(ticket)
    }

    /// Discard the open session, if any
    pub fn cancel_picker(&mut self) {
        if self.session.take().is_some() {
            debug!("picker cancelled");
        }
    }

    /// Merge the open session's selection and splice the picks into the shelf
    pub fn confirm_picker(&mut self) -> Result<ConfirmSummary, ManagerError> {
        let session = self.session.take().ok_or(ManagerError::PickerNotOpen)?;
        let target = session.target();
        let outcome = session.confirm();
        let inserted = outcome.picks.len();
        self.shelf.insert_picks(target, outcome.picks)?;
        debug!(
            target,
            inserted,
            skipped = outcome.skipped,
            "picker confirmed"
        );
        Ok(ConfirmSummary {
            inserted,
            skipped: outcome.skipped,
        })
    }

    // ========================================================================
    // Shelf operations, forwarded
    // ========================================================================

    pub fn apply_drag(&mut self, event: &DragEnd) -> DragOutcome {
        self.shelf.apply_drag(event)
    }

    pub fn add_slot(&mut self) -> SlotId {
        self.shelf.add_slot()
    }

    pub fn remove_slot(&mut self, slot_id: SlotId) -> Result<(), ShelfError> {
        self.shelf.remove_slot(slot_id)
    }

    pub fn remove_variant(&mut self, slot_index: usize, variant_id: i64) -> Result<(), ShelfError> {
        self.shelf.remove_variant(slot_index, variant_id)
    }

    pub fn set_discount_value(&mut self, slot_index: usize, value: f64) -> Result<(), ShelfError> {
        self.shelf.set_discount_value(slot_index, value)
    }

    pub fn set_discount_kind(
        &mut self,
        slot_index: usize,
        kind: DiscountKind,
    ) -> Result<(), ShelfError> {
        self.shelf.set_discount_kind(slot_index, kind)
    }
}

#[cfg(test)]
mod tests;

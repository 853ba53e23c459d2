//! Drag-end routing
//!
//! The drag collaborator reports one event per finished gesture. Routing
//! only acts when both handles sit on the same level, and variant moves
//! additionally require the same owning slot. Every ignored drop names its
//! reason so hosts can log it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Shelf, SlotId};

/// One end of a drag gesture: a slot row or a variant row within a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragHandle {
    Slot {
        id: SlotId,
    },
    Variant {
        /// Index of the owning slot, carried in the drag payload
        owner: usize,
        id: i64,
    },
}

/// A finished drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub active: DragHandle,
    /// `None` when the item was dropped outside every droppable level
    pub over: Option<DragHandle>,
}

/// What a drag-end did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Moved,
    /// Dropped outside any droppable level
    NoTarget,
    /// Dropped over itself
    SamePosition,
    /// Slot dragged over a variant or vice versa
    LevelMismatch,
    /// Variant dropped onto a different slot's variant list
    CrossSlot,
    /// A handle no longer resolves to a live slot or variant
    UnknownHandle,
}

impl Shelf {
    /// Route a drag-end event into the matching reorder operation
    pub fn apply_drag(&mut self, event: &DragEnd) -> DragOutcome {
        let Some(over) = event.over else {
            debug!("drag ended outside any target, ignoring");
            return DragOutcome::NoTarget;
        };
        if event.active == over {
            return DragOutcome::SamePosition;
        }

        match (event.active, over) {
            (DragHandle::Slot { id: from }, DragHandle::Slot { id: to }) => {
                if self.reorder_slots(from, to) {
                    DragOutcome::Moved
                } else {
                    DragOutcome::UnknownHandle
                }
            }
            (
                DragHandle::Variant {
                    owner: active_owner,
                    id: from,
                },
                DragHandle::Variant {
                    owner: over_owner,
                    id: to,
                },
            ) => {
                if active_owner != over_owner {
                    debug!(active_owner, over_owner, "cross-slot variant drop ignored");
                    return DragOutcome::CrossSlot;
                }
                if self.reorder_variants(active_owner, from, to) {
                    DragOutcome::Moved
                } else {
                    DragOutcome::UnknownHandle
                }
            }
            _ => {
                debug!("drag levels do not match, ignoring");
                DragOutcome::LevelMismatch
            }
        }
    }
}

//! Shelf widget core state engine
//!
//! Pure state-transition logic for the merchandising shelf:
//!
//! - `selection` - checked product/variant ids inside a picker session
//! - `merge` - flat checked ids + catalog snapshot -> nested picks
//! - `shelf` - the ordered slot list (insert, remove, drag reorder, discounts)
//! - `picker` - one picker session: debounced search, pagination, fetch fencing
//! - `manager` - coordinator owning the shelf and at most one open session
//!
//! Everything here is synchronous; the only async seam is the
//! [`picker::CatalogSource`] trait, implemented by the `shelf-client` crate.

pub mod manager;
pub mod merge;
pub mod picker;
pub mod selection;
pub mod shelf;

// Re-exports
pub use manager::{ConfirmSummary, ManagerError, ShelfManager};
pub use merge::{merge_selection, MergeOutcome, PickedProduct};
pub use picker::{
    CatalogPage, CatalogSource, FetchApplied, FetchMode, FetchTicket, PickerError, PickerSession,
    SourceError, SEARCH_DEBOUNCE,
};
pub use selection::{CheckedId, SelectionSet};
pub use shelf::{DragEnd, DragHandle, DragOutcome, Shelf, ShelfError, Slot, SlotContent, SlotId};

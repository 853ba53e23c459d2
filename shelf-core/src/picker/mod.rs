//! Picker session
//!
//! Explicit state object for one open picker dialog: the in-progress
//! selection, the loaded catalog window, debounced search, the pagination
//! cursor, and the request fence. Created when the dialog opens, discarded
//! on confirm or cancel.
//!
//! The session never performs I/O. It hands out [`FetchTicket`]s and takes
//! results back through [`PickerSession::apply_fetch`]; a ticket that is no
//! longer the latest issued one is fenced out, so a late response from a
//! superseded search can never overwrite newer state.

mod debounce;
pub mod source;

pub use debounce::{SearchDebouncer, SEARCH_DEBOUNCE};
pub use source::{CatalogPage, CatalogSource, SourceError};

use std::collections::HashSet;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, warn};

use shared::{CatalogProduct, CatalogQuery, DEFAULT_PAGE_LIMIT};

use crate::merge::{merge_selection, MergeOutcome};
use crate::selection::SelectionSet;

/// Picker misuse errors
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("product {0} is not in the loaded catalog window")]
    ProductNotLoaded(i64),

    #[error("variant {variant_id} of product {product_id} is not in the loaded catalog window")]
    VariantNotLoaded { product_id: i64, variant_id: i64 },
}

/// Whether a fetch replaces or extends the loaded window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// New search: replace the window
    Flush,
    /// Pagination: extend the window
    Append,
}

/// Fenced handle for one issued catalog request
///
/// Not cloneable on purpose: one ticket, one application.
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
    pub mode: FetchMode,
    pub query: CatalogQuery,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What applying a fetch result did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    /// Products landed in the window
    Applied,
    /// End-of-pagination sentinel: `has_more` cleared
    EndOfResults,
    /// Fetch failed; window emptied on flush, untouched on append
    Failed,
    /// Ticket was fenced out by a newer request; state untouched
    Stale,
}

/// State of one open picker dialog
#[derive(Debug)]
pub struct PickerSession {
    /// Shelf slot index being edited
    target: usize,
    selection: SelectionSet,
    /// Loaded catalog window
    products: Vec<CatalogProduct>,
    /// Product ids already filled on the shelf, hidden from the list
    excluded: HashSet<i64>,
    /// Product of the slot being edited; always visible despite exclusion
    editing_product: Option<i64>,
    debouncer: SearchDebouncer,
    /// Last search text actually committed to a fetch
    committed_search: String,
    page: u32,
    limit: u32,
    has_more: bool,
    loading: bool,
    /// Latest issued request sequence; older tickets are stale
    issued_seq: u64,
}

impl PickerSession {
    /// Open a session for the given slot
    ///
    /// `editing` carries the slot's current product and retained variant ids
    /// when the slot is already filled; the selection is seeded from it.
    pub fn open(
        target: usize,
        excluded: HashSet<i64>,
        editing: Option<(i64, Vec<i64>)>,
    ) -> Self {
        let (editing_product, selection) = match editing {
            Some((product_id, variant_ids)) => (
                Some(product_id),
                SelectionSet::seeded(product_id, &variant_ids),
            ),
            None => (None, SelectionSet::new()),
        };
        Self {
            target,
            selection,
            products: Vec::new(),
            excluded,
            editing_product,
            debouncer: SearchDebouncer::new(),
            committed_search: String::new(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            has_more: true,
            loading: false,
            issued_seq: 0,
        }
    }

    /// Override the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    /// Ticket for the immediate first fetch (unfiltered, page 1)
    ///
    /// Issue exactly once, right after opening.
    pub fn initial_ticket(&mut self) -> FetchTicket {
        let query = CatalogQuery::first_page().with_limit(self.limit);
        self.issue(FetchMode::Flush, query)
    }

    /// Record a keystroke in the search box
    pub fn set_search_input(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.input(text, now);
    }

    /// Deadline of the pending debounced search, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Commit the pending search once its debounce window has passed
    ///
    /// Firing with text equal to the last committed search issues no fetch.
    pub fn fire_due_search(&mut self, now: Instant) -> Option<FetchTicket> {
        let text = self.debouncer.fire_due(now)?;
        if text == self.committed_search {
            debug!(search = %text, "search unchanged, skipping fetch");
            return None;
        }
        self.committed_search = text;
        self.has_more = true;
        let query = CatalogQuery::first_page()
            .with_search(self.committed_search.clone())
            .with_limit(self.limit);
        Some(self.issue(FetchMode::Flush, query))
    }

    /// Ticket for the next page of the current search
    ///
    /// Refused while a flush is loading and after end-of-results.
    pub fn begin_load_more(&mut self) -> Option<FetchTicket> {
        if self.loading || !self.has_more {
            return None;
        }
        let mut query = CatalogQuery::first_page()
            .with_search(self.committed_search.clone())
            .with_limit(self.limit);
        query.page = self.page + 1;
        Some(self.issue(FetchMode::Append, query))
    }

    fn issue(&mut self, mode: FetchMode, query: CatalogQuery) -> FetchTicket {
        self.issued_seq += 1;
        if mode == FetchMode::Flush {
            self.loading = true;
        }
        self.page = query.page;
        debug!(
            seq = self.issued_seq,
            page = query.page,
            search = query.search_text(),
            "issuing catalog fetch"
        );
        FetchTicket {
            seq: self.issued_seq,
            mode,
            query,
        }
    }

    /// Apply a fetch result; the only place results touch session state
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<CatalogPage, SourceError>,
    ) -> FetchApplied {
        if ticket.seq != self.issued_seq {
            warn!(
                seq = ticket.seq,
                latest = self.issued_seq,
                "stale catalog response dropped"
            );
            return FetchApplied::Stale;
        }
        self.loading = false;

        match result {
            Ok(Some(products)) => {
                match ticket.mode {
                    FetchMode::Flush => self.products = products,
                    FetchMode::Append => self.products.extend(products),
                }
                debug!(
                    seq = ticket.seq,
                    loaded = self.products.len(),
                    "catalog fetch applied"
                );
                FetchApplied::Applied
            }
            Ok(None) => {
                self.has_more = false;
                if ticket.mode == FetchMode::Flush {
                    self.products.clear();
                }
                debug!(seq = ticket.seq, "catalog reports end of results");
                FetchApplied::EndOfResults
            }
            Err(err) => {
                warn!(seq = ticket.seq, error = %err, "catalog fetch failed");
                if ticket.mode == FetchMode::Flush {
                    self.products.clear();
                }
                FetchApplied::Failed
            }
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Toggle a product row; resolves its variant ids from the loaded window
    pub fn toggle_product(&mut self, product_id: i64) -> Result<(), PickerError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(PickerError::ProductNotLoaded(product_id))?;
        let variant_ids = product.variant_ids();
        self.selection.toggle_product(product_id, &variant_ids);
        Ok(())
    }

    /// Toggle a variant row
    pub fn toggle_variant(&mut self, product_id: i64, variant_id: i64) -> Result<(), PickerError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(PickerError::ProductNotLoaded(product_id))?;
        if product.variant(variant_id).is_none() {
            return Err(PickerError::VariantNotLoaded {
                product_id,
                variant_id,
            });
        }
        self.selection.toggle_variant(product_id, variant_id);
        Ok(())
    }

    /// Loaded products minus those already filled elsewhere on the shelf
    ///
    /// The product of the slot being edited stays visible.
    pub fn visible_products(&self) -> Vec<&CatalogProduct> {
        self.products
            .iter()
            .filter(|p| Some(p.id) == self.editing_product || !self.excluded.contains(&p.id))
            .collect()
    }

    /// Footer count of selected products
    pub fn selected_product_count(&self) -> usize {
        self.selection.product_count()
    }

    /// Merge the selection against the loaded window
    pub fn confirm(&self) -> MergeOutcome {
        merge_selection(&self.selection, &self.products)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn loading(&self) -> bool {
        self.loading
    }
}

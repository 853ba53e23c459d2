//! Async picker driver
//!
//! Couples a picker session with a catalog source and the tokio timer:
//! keystrokes go into the session's debounce, `settle_search` waits out the
//! quiet period and runs the resulting fetch, `load_more` runs the next
//! pagination fetch. Must be created inside a tokio runtime; the session's
//! clock is anchored to the runtime timer so paused-time tests advance it.

use std::time::Instant;

use shelf_core::{CatalogSource, FetchApplied, FetchTicket, PickerSession};

/// Drives one picker session against a catalog source
pub struct PickerDriver<S: CatalogSource> {
    session: PickerSession,
    source: S,
    epoch_std: Instant,
    epoch_rt: tokio::time::Instant,
}

impl<S: CatalogSource> PickerDriver<S> {
    pub fn new(session: PickerSession, source: S) -> Self {
        Self {
            session,
            source,
            epoch_std: Instant::now(),
            epoch_rt: tokio::time::Instant::now(),
        }
    }

    /// Session clock derived from the runtime timer
    fn now(&self) -> Instant {
        self.epoch_std + self.epoch_rt.elapsed()
    }

    pub fn session(&self) -> &PickerSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut PickerSession {
        &mut self.session
    }

    pub fn into_session(self) -> PickerSession {
        self.session
    }

    /// Run the immediate first fetch; call once, right after opening
    pub async fn prime(&mut self) -> FetchApplied {
        let ticket = self.session.initial_ticket();
        self.run(ticket).await
    }

    /// Forward a keystroke into the debounce window
    pub fn type_search(&mut self, text: impl Into<String>) {
        let now = self.now();
        self.session.set_search_input(text, now);
    }

    /// Wait out the debounce and run the committed search, if any
    ///
    /// Returns `None` when nothing is pending or the fired text matched the
    /// last committed search.
    pub async fn settle_search(&mut self) -> Option<FetchApplied> {
        loop {
            let deadline = self.session.next_deadline()?;
            let wait = deadline.saturating_duration_since(self.now());
            tokio::time::sleep(wait).await;

            if let Some(ticket) = self.session.fire_due_search(self.now()) {
                return Some(self.run(ticket).await);
            }
            // Fired but suppressed as unchanged: nothing pending anymore
            if self.session.next_deadline().is_none() {
                return None;
            }
        }
    }

    /// Fetch the next page of the current search
    pub async fn load_more(&mut self) -> Option<FetchApplied> {
        let ticket = self.session.begin_load_more()?;
        Some(self.run(ticket).await)
    }

    async fn run(&mut self, ticket: FetchTicket) -> FetchApplied {
        let result = self.source.fetch_page(&ticket.query).await;
        self.session.apply_fetch(ticket, result)
    }
}

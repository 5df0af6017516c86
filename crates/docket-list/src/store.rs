//! Per-list state store: displayed records, counters, archive buffer
//!
//! The store is the single writable surface of one list instance. The
//! controllers in `docket-client` mutate it; a view layer observes it through
//! [`ListChangeListener`] registrations and the read accessors. Records are
//! opaque to the store and addressed by their index in the displayed page.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use crate::listener::{ListChangeListener, ListEvent};
use crate::pager::page_window;

/// Archive-action state of one displayed row.
///
/// The UI renders its trigger control from this: `Pending` disables the
/// control, `Failed` carries the per-row message to attach to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActionState {
    /// No action outstanding.
    #[default]
    Idle,
    /// Action request in flight.
    Pending,
    /// Action succeeded; removal awaits the dismissal signal.
    Confirmed,
    /// Action failed.
    Failed(String),
}

/// One displayed row: the opaque record plus its action state.
#[derive(Clone)]
pub struct ListRow<T> {
    pub data: T,
    pub action: ActionState,
}

/// A record moved out of the visible list by a committed archive action,
/// retained for audit display until the next page replacement.
#[derive(Clone)]
pub struct ArchivedRecord<T> {
    pub record: T,
    pub archived_at: DateTime<Utc>,
}

/// Outcome of committing a [`PendingRemoval`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The row was removed and moved into the archive buffer.
    Removed,
    /// The page was replaced after the action succeeded; nothing to remove.
    Superseded,
}

/// Deferred removal handle for a successful archive action.
///
/// Produced when the action endpoint reports success. The removal itself is
/// committed only when the UI dismissal signal arrives, so the row stays
/// visible (in `Confirmed` state) while a confirmation dialog is open.
pub struct PendingRemoval<T> {
    store: Arc<ListStore<T>>,
    index: usize,
    generation: u64,
}

impl<T: Clone> PendingRemoval<T> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Commit the removal: drop the row, decrement the total once, and move
    /// the record into the archive buffer. A page replacement since the
    /// action succeeded supersedes the handle and the commit is a no-op.
    pub fn commit(self) -> CommitOutcome {
        self.store.commit_removal(self.index, self.generation)
    }
}

struct StoreInner<T> {
    rows: Vec<ListRow<T>>,
    total: u64,
    page_limit: u64,
    current_page: u64,
    show_inactive: bool,
    fetching: bool,
    fetch_error: Option<String>,
    archived: Vec<ArchivedRecord<T>>,
    // Bumped on every wholesale replace; stale PendingRemovals are detected
    // by comparing against it.
    generation: u64,
}

/// State store for one paginated, archivable list.
pub struct ListStore<T> {
    inner: RwLock<StoreInner<T>>,
    listeners: RwLock<Vec<Arc<dyn ListChangeListener>>>,
}

impl<T: Clone> ListStore<T> {
    /// Create a store for one list instance.
    ///
    /// Panics if `page_limit` is zero; validated configuration is the
    /// caller's job.
    pub fn new(page_limit: u64, show_inactive: bool) -> Self {
        assert!(page_limit > 0, "page_limit must be positive");
        Self {
            inner: RwLock::new(StoreInner {
                rows: Vec::new(),
                total: 0,
                page_limit,
                current_page: 1,
                show_inactive,
                fetching: false,
                fetch_error: None,
                archived: Vec::new(),
                generation: 0,
            }),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Register a listener for subsequent state changes.
    pub fn add_listener(&self, listener: Arc<dyn ListChangeListener>) {
        self.listeners.write().push(listener);
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Snapshot of the displayed rows.
    pub fn rows(&self) -> Vec<ListRow<T>> {
        self.inner.read().rows.clone()
    }

    /// Snapshot of the displayed records without their action states.
    pub fn records(&self) -> Vec<T> {
        self.inner.read().rows.iter().map(|r| r.data.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().rows.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.inner.read().total
    }

    pub fn page_limit(&self) -> u64 {
        self.inner.read().page_limit
    }

    pub fn current_page(&self) -> u64 {
        self.inner.read().current_page
    }

    pub fn show_inactive(&self) -> bool {
        self.inner.read().show_inactive
    }

    pub fn fetching(&self) -> bool {
        self.inner.read().fetching
    }

    pub fn fetch_error(&self) -> Option<String> {
        self.inner.read().fetch_error.clone()
    }

    /// Snapshot of the archive buffer, oldest commit first.
    pub fn archived(&self) -> Vec<ArchivedRecord<T>> {
        self.inner.read().archived.clone()
    }

    pub fn max_page(&self) -> u64 {
        let inner = self.inner.read();
        max_page_of(inner.total, inner.page_limit)
    }

    /// The page after the current one, if any.
    pub fn next_page(&self) -> Option<u64> {
        let inner = self.inner.read();
        let max_page = max_page_of(inner.total, inner.page_limit);
        (inner.current_page < max_page).then(|| inner.current_page + 1)
    }

    /// The page before the current one, if any.
    pub fn previous_page(&self) -> Option<u64> {
        let inner = self.inner.read();
        (inner.current_page > 1).then(|| inner.current_page - 1)
    }

    /// First and last 1-based item positions on the current page, for
    /// "showing X-Y of Z" summaries. `None` when the list is empty.
    pub fn item_range(&self) -> Option<(u64, u64)> {
        let inner = self.inner.read();
        if inner.total == 0 || inner.rows.is_empty() {
            return None;
        }
        let first = (inner.current_page - 1) * inner.page_limit + 1;
        let last = first + inner.rows.len() as u64 - 1;
        Some((first, last))
    }

    /// Window of page numbers for the pagination controls.
    pub fn window(&self) -> Vec<u64> {
        let inner = self.inner.read();
        page_window(inner.current_page, max_page_of(inner.total, inner.page_limit))
    }

    pub fn action_state(&self, index: usize) -> Option<ActionState> {
        self.inner.read().rows.get(index).map(|r| r.action.clone())
    }

    // ------------------------------------------------------------------
    // Mutations (controllers only)
    // ------------------------------------------------------------------

    /// Atomically replace the displayed page with a fetch response.
    ///
    /// The server-reported page is clamped into `[1, max(max_page, 1)]`.
    /// Row action states reset, the archive buffer is cleared, and any
    /// outstanding [`PendingRemoval`] is superseded.
    pub fn replace_records(&self, records: Vec<T>, total: u64, current_page: u64) {
        let (page, total) = {
            let mut inner = self.inner.write();
            inner.rows = records
                .into_iter()
                .map(|data| ListRow {
                    data,
                    action: ActionState::Idle,
                })
                .collect();
            inner.total = total;
            inner.current_page = clamp_page(current_page, total, inner.page_limit);
            inner.archived.clear();
            inner.fetching = false;
            inner.fetch_error = None;
            inner.generation += 1;
            (inner.current_page, inner.total)
        };
        debug!(page, total, "replaced list page");
        self.notify(ListEvent::PageReplaced { page, total });
    }

    /// Update the page size. Returns false (and changes nothing) for zero.
    ///
    /// Changing the limit invalidates the current offset; the fetch
    /// controller always follows up with a fetch of page 1.
    pub fn set_page_limit(&self, limit: u64) -> bool {
        if limit == 0 {
            return false;
        }
        {
            let mut inner = self.inner.write();
            inner.page_limit = limit;
            // Keep current_page inside the new page range until the
            // follow-up fetch lands.
            inner.current_page = clamp_page(inner.current_page, inner.total, limit);
        }
        self.notify(ListEvent::LimitChanged { limit });
        true
    }

    /// Set archived-record visibility for subsequent fetches.
    pub fn set_show_inactive(&self, show_inactive: bool) {
        self.inner.write().show_inactive = show_inactive;
    }

    /// Remove the rows at `indices` and decrement the total by the count
    /// removed. Out-of-range indices are ignored. Returns the removed
    /// records in index order.
    pub fn remove_records_at_indices(&self, indices: &[usize]) -> Vec<T> {
        let (removed, total, touched) = {
            let mut inner = self.inner.write();
            let mut touched: Vec<usize> = indices
                .iter()
                .copied()
                .filter(|&i| i < inner.rows.len())
                .collect();
            touched.sort_unstable();
            touched.dedup();

            let mut removed = Vec::with_capacity(touched.len());
            for &index in touched.iter().rev() {
                removed.push(inner.rows.remove(index).data);
            }
            removed.reverse();
            inner.total = inner.total.saturating_sub(removed.len() as u64);
            (removed, inner.total, touched)
        };
        if !touched.is_empty() {
            self.notify(ListEvent::RecordsRemoved {
                indices: touched,
                total,
            });
        }
        removed
    }

    /// Mark a fetch in flight.
    pub fn begin_fetch(&self, page: u64) {
        {
            let mut inner = self.inner.write();
            inner.fetching = true;
            inner.fetch_error = None;
        }
        self.notify(ListEvent::FetchStarted { page });
    }

    /// Record a failed fetch; the displayed records are left intact.
    pub fn fail_fetch(&self, message: impl Into<String>) {
        let message = message.into();
        {
            let mut inner = self.inner.write();
            inner.fetching = false;
            inner.fetch_error = Some(message.clone());
        }
        self.notify(ListEvent::FetchFailed { message });
    }

    /// Set the action state of the row at `index`. Returns false if the
    /// index is out of range.
    pub fn set_action_state(&self, index: usize, state: ActionState) -> bool {
        let updated = {
            let mut inner = self.inner.write();
            match inner.rows.get_mut(index) {
                Some(row) => {
                    row.action = state;
                    true
                }
                None => false,
            }
        };
        if updated {
            self.notify(ListEvent::ActionStateChanged { index });
        }
        updated
    }

    /// Build the deferred-removal handle for a row whose archive action
    /// succeeded. Valid until the next page replacement.
    pub fn pending_removal(self: &Arc<Self>, index: usize) -> PendingRemoval<T> {
        PendingRemoval {
            store: self.clone(),
            index,
            generation: self.inner.read().generation,
        }
    }

    fn commit_removal(&self, index: usize, generation: u64) -> CommitOutcome {
        let committed = {
            let mut inner = self.inner.write();
            if inner.generation != generation || index >= inner.rows.len() {
                None
            } else {
                let row = inner.rows.remove(index);
                inner.total = inner.total.saturating_sub(1);
                inner.archived.push(ArchivedRecord {
                    record: row.data,
                    archived_at: Utc::now(),
                });
                Some(inner.total)
            }
        };
        match committed {
            Some(total) => {
                self.notify(ListEvent::RecordsRemoved {
                    indices: vec![index],
                    total,
                });
                CommitOutcome::Removed
            }
            None => {
                debug!(index, "pending removal superseded by a page replacement");
                CommitOutcome::Superseded
            }
        }
    }

    fn notify(&self, event: ListEvent) {
        let listeners: Vec<_> = self.listeners.read().iter().cloned().collect();
        for listener in listeners {
            listener.on_list_event(event.clone());
        }
    }
}

fn max_page_of(total: u64, page_limit: u64) -> u64 {
    total.div_ceil(page_limit)
}

fn clamp_page(page: u64, total: u64, page_limit: u64) -> u64 {
    let max_page = max_page_of(total, page_limit).max(1);
    page.clamp(1, max_page)
}

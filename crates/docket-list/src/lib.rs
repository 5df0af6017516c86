//! docket-list: framework-free core for server-backed, archivable lists
//!
//! Holds the pure pieces of the paginated list pattern: the page-number
//! window calculator, the per-list state store with its archive buffer, and
//! the change-listener seam a reactive view layer binds to. All network I/O
//! lives in `docket-client`.

pub mod listener;
pub mod pager;
pub mod store;

pub use listener::{FnListListener, ListChangeListener, ListEvent};
pub use pager::page_window;
pub use store::{ActionState, ArchivedRecord, CommitOutcome, ListRow, ListStore, PendingRemoval};

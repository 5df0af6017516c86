//! List change notifications delivered to a reactive view layer

/// A state-store mutation delivered to listeners.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEvent {
    /// A page fetch was issued.
    FetchStarted { page: u64 },
    /// A fetch response replaced the displayed page.
    PageReplaced { page: u64, total: u64 },
    /// A fetch failed; the previously displayed records are untouched.
    FetchFailed { message: String },
    /// The page size changed.
    LimitChanged { limit: u64 },
    /// Rows were removed from the displayed page.
    RecordsRemoved { indices: Vec<usize>, total: u64 },
    /// A row's archive-action state changed.
    ActionStateChanged { index: usize },
}

/// Trait for receiving list state change notifications.
///
/// Implement this to re-render bound UI whenever the store mutates.
/// Listeners only observe; all mutation goes through the store operations.
pub trait ListChangeListener: Send + Sync + 'static {
    fn on_list_event(&self, event: ListEvent);
}

/// A listener that invokes a closure.
pub struct FnListListener<F>
where
    F: Fn(ListEvent) + Send + Sync + 'static,
{
    f: F,
}

impl<F> FnListListener<F>
where
    F: Fn(ListEvent) + Send + Sync + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> ListChangeListener for FnListListener<F>
where
    F: Fn(ListEvent) + Send + Sync + 'static,
{
    fn on_list_event(&self, event: ListEvent) {
        (self.f)(event);
    }
}

//! docket-client: HTTP controllers for server-backed archivable lists
//!
//! Wires the pure state core in `docket-list` to a pair of list endpoints
//! over HTTP: a fetch controller for page-data requests and an archive
//! controller for per-record archive/unarchive actions. Each [`ListClient`]
//! owns the state of exactly one list instance.

pub mod archive;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

pub use archive::ArchiveActionController;
pub use config::ListClientConfig;
pub use error::ListClientError;
pub use fetch::{FetchOutcome, ListFetchController};
pub use http::DocketHttpClient;

use docket_list::{ListStore, PendingRemoval};

/// One paginated, archivable list bound to its server endpoints.
pub struct ListClient<T> {
    store: Arc<ListStore<T>>,
    fetch: ListFetchController<T>,
    archive: ArchiveActionController<T>,
}

impl<T> ListClient<T>
where
    T: DeserializeOwned + Clone + Send + Sync + Default + 'static,
{
    /// Validate `config` and build an isolated list instance.
    pub fn new(config: ListClientConfig) -> Result<Self, ListClientError> {
        config.validate()?;
        let http = Arc::new(DocketHttpClient::new(&config)?);
        let store = Arc::new(ListStore::new(config.page_limit, config.show_inactive));
        let fetch = ListFetchController::new(http.clone(), store.clone(), &config);
        let archive = ArchiveActionController::new(http, store.clone());
        Ok(Self {
            store,
            fetch,
            archive,
        })
    }

    /// Shared handle to the list state store.
    pub fn store(&self) -> &Arc<ListStore<T>> {
        &self.store
    }

    /// Fetch `page`; `None` is a no-op.
    pub async fn change_page(&self, page: Option<u64>) -> Result<FetchOutcome, ListClientError> {
        self.fetch.change_page(page).await
    }

    /// Change the page size; always restarts from page 1.
    pub async fn set_page_limit(&self, limit: u64) -> Result<FetchOutcome, ListClientError> {
        self.fetch.set_page_limit(limit).await
    }

    /// Toggle archived-record visibility; restarts from page 1.
    pub async fn set_show_inactive(
        &self,
        show_inactive: bool,
    ) -> Result<FetchOutcome, ListClientError> {
        self.fetch.set_show_inactive(show_inactive).await
    }

    /// Update the free-text filter; restarts from page 1.
    pub async fn set_search(
        &self,
        search: Option<String>,
    ) -> Result<FetchOutcome, ListClientError> {
        self.fetch.set_search(search).await
    }

    /// Archive or unarchive the record at `record_index`.
    pub async fn take_archive_action<F: Serialize + ?Sized>(
        &self,
        action_url: &str,
        form: &F,
        record_index: usize,
    ) -> Result<PendingRemoval<T>, ListClientError> {
        self.archive
            .take_archive_action(action_url, form, record_index)
            .await
    }
}

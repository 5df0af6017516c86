//! List fetch controller: page-data requests with a stale-response guard

use std::collections::HashMap;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use docket_api::{ListPage, ListQuery};
use docket_list::ListStore;

use crate::{config::ListClientConfig, error::ListClientError, http::DocketHttpClient};

/// What became of a `change_page` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the displayed page.
    Applied,
    /// No page was requested (disabled prev/next affordance).
    Skipped,
    /// A newer fetch was issued while this one was in flight; the response
    /// was discarded.
    Stale,
}

/// Issues page-data requests and reconciles responses into the store.
///
/// Requests carry a monotonically increasing token and a response is applied
/// only while its token is still the most recently issued one, so the last
/// issued request wins regardless of response arrival order. In-flight
/// requests are never aborted; superseded responses are discarded on
/// arrival.
pub struct ListFetchController<T> {
    http: Arc<DocketHttpClient>,
    store: Arc<ListStore<T>>,
    list_path: String,
    filters: HashMap<String, String>,
    search: RwLock<Option<String>>,
    issued: AtomicU64,
}

impl<T> ListFetchController<T>
where
    T: DeserializeOwned + Clone + Send + Sync + Default + 'static,
{
    pub fn new(
        http: Arc<DocketHttpClient>,
        store: Arc<ListStore<T>>,
        config: &ListClientConfig,
    ) -> Self {
        Self {
            http,
            store,
            list_path: config.list_path.clone(),
            filters: config.filters.clone(),
            search: RwLock::new(None),
            issued: AtomicU64::new(0),
        }
    }

    /// Fetch `page` and replace the displayed records on success.
    ///
    /// `None` is the no-op used by disabled prev/next affordances. A failed
    /// fetch flags the store and leaves the displayed records intact.
    pub async fn change_page(&self, page: Option<u64>) -> Result<FetchOutcome, ListClientError> {
        let Some(page) = page else {
            return Ok(FetchOutcome::Skipped);
        };
        if page == 0 {
            return Err(ListClientError::InvalidPage);
        }

        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.store.begin_fetch(page);

        let search = self.search.read().clone();
        let query = ListQuery {
            page,
            limit: self.store.page_limit(),
            show_inactive: self.store.show_inactive(),
            query: search.as_deref(),
            filters: &self.filters,
        };

        let result: Result<ListPage<T>, ListClientError> =
            self.http.get_with_query(&self.list_path, &query).await;

        if self.issued.load(Ordering::SeqCst) != token {
            debug!(page, "discarding stale fetch response");
            return Ok(FetchOutcome::Stale);
        }

        match result {
            Ok(body) if body.success => {
                self.store
                    .replace_records(body.data_list, body.data_list_total, body.current_page);
                Ok(FetchOutcome::Applied)
            }
            Ok(_) => {
                let error = ListClientError::Rejected { message: None };
                self.store.fail_fetch(error.to_string());
                Err(error)
            }
            Err(error) => {
                warn!(page, %error, "list fetch failed");
                self.store.fail_fetch(error.to_string());
                Err(error)
            }
        }
    }

    /// Change the page size; always restarts from page 1.
    pub async fn set_page_limit(&self, limit: u64) -> Result<FetchOutcome, ListClientError> {
        if !self.store.set_page_limit(limit) {
            return Err(ListClientError::InvalidConfig(
                "page_limit must be positive".to_string(),
            ));
        }
        self.change_page(Some(1)).await
    }

    /// Toggle archived-record visibility; restarts from page 1.
    pub async fn set_show_inactive(
        &self,
        show_inactive: bool,
    ) -> Result<FetchOutcome, ListClientError> {
        self.store.set_show_inactive(show_inactive);
        self.change_page(Some(1)).await
    }

    /// Update the free-text filter; restarts from page 1.
    pub async fn set_search(
        &self,
        search: Option<String>,
    ) -> Result<FetchOutcome, ListClientError> {
        *self.search.write() = search;
        self.change_page(Some(1)).await
    }
}

//! Archive action controller: single-record archive/unarchive requests

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use docket_api::ActionOutcome;
use docket_list::{ActionState, ListStore, PendingRemoval};

use crate::{error::ListClientError, http::DocketHttpClient};

/// Issues archive/unarchive requests for single records.
///
/// A successful action does not remove the row immediately: the returned
/// [`PendingRemoval`] is committed by the UI dismissal signal, so the row
/// stays visible while a confirmation dialog is open. Failures mark the row
/// and leave the list untouched; a retry is always user-initiated.
pub struct ArchiveActionController<T> {
    http: Arc<DocketHttpClient>,
    store: Arc<ListStore<T>>,
}

impl<T> ArchiveActionController<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(http: Arc<DocketHttpClient>, store: Arc<ListStore<T>>) -> Self {
        Self { http, store }
    }

    /// POST `action_url` for the record at `record_index`.
    ///
    /// `form` carries the endpoint-specific identifying fields. `action_url`
    /// may be a path relative to the configured base URL or a fully formed
    /// endpoint. The row's action state tracks the request so the UI can
    /// disable the trigger while it is in flight.
    pub async fn take_archive_action<F: Serialize + ?Sized>(
        &self,
        action_url: &str,
        form: &F,
        record_index: usize,
    ) -> Result<PendingRemoval<T>, ListClientError> {
        if action_url.is_empty() {
            return Err(ListClientError::EmptyActionUrl);
        }
        let len = self.store.len();
        if record_index >= len {
            return Err(ListClientError::InvalidIndex {
                index: record_index,
                len,
            });
        }

        self.store
            .set_action_state(record_index, ActionState::Pending);

        match self.http.post_form::<ActionOutcome, F>(action_url, form).await {
            Ok(outcome) if outcome.success => {
                debug!(record_index, "archive action confirmed");
                self.store
                    .set_action_state(record_index, ActionState::Confirmed);
                Ok(self.store.pending_removal(record_index))
            }
            Ok(outcome) => {
                let message = outcome
                    .message
                    .clone()
                    .unwrap_or_else(|| "action failed".to_string());
                self.store
                    .set_action_state(record_index, ActionState::Failed(message));
                Err(ListClientError::Rejected {
                    message: outcome.message,
                })
            }
            Err(error) => {
                warn!(record_index, %error, "archive action failed");
                self.store
                    .set_action_state(record_index, ActionState::Failed(error.to_string()));
                Err(error)
            }
        }
    }
}

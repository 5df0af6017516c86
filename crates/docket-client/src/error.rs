// Error types for the list client

/// Errors surfaced by the fetch and archive controllers.
///
/// Transport failures and non-2xx statuses mean the server could not be
/// reached or refused the request; `Rejected` is the application-level
/// failure (`success: false` in a 200 response). All of them are terminal
/// for the triggering action; recovery is user-initiated.
#[derive(Debug, thiserror::Error)]
pub enum ListClientError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("page numbers start at 1")]
    InvalidPage,

    #[error("record index {index} out of range (page holds {len} records)")]
    InvalidIndex { index: usize, len: usize },

    #[error("action url must not be empty")]
    EmptyActionUrl,

    #[error("could not contact server: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("server rejected the request: {}", message.as_deref().unwrap_or("no detail"))]
    Rejected { message: Option<String> },
}

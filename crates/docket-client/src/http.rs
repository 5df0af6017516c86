//! HTTP plumbing for list endpoints
//!
//! Thin reqwest wrapper shared by the fetch and archive controllers.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{config::ListClientConfig, error::ListClientError};

/// HTTP client bound to one server base URL.
pub struct DocketHttpClient {
    client: Client,
    base_url: String,
}

impl DocketHttpClient {
    pub fn new(config: &ListClientConfig) -> Result<Self, ListClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()
            .map_err(|e| ListClientError::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the full URL for `path`; a fully-formed http(s) URL is used
    /// as-is (archive action endpoints may be handed in fully formed).
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Make a GET request with query parameters, expecting a JSON body.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ListClientError> {
        let url = self.build_url(path);
        debug!(%url, "issuing list fetch");
        let response = self.client.get(&url).query(query).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with form data, expecting a JSON body.
    pub async fn post_form<T: DeserializeOwned, F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<T, ListClientError> {
        let url = self.build_url(path);
        debug!(%url, "issuing action post");
        let response = self.client.post(&url).form(form).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ListClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "request failed");
            Err(ListClientError::RequestFailed {
                status: status.as_u16(),
                body,
            })
        }
    }
}

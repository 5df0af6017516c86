//! Typed configuration for a list client instance

use std::collections::HashMap;

use url::Url;

use crate::error::ListClientError;

/// Configuration for one paginated list instance.
///
/// Every list owns its own validated configuration; there is no shared
/// global setup between lists on the same page.
#[derive(Clone, Debug)]
pub struct ListClientConfig {
    /// Server base URL, e.g. "http://127.0.0.1:8000"
    pub base_url: String,
    /// Path of the list fetch endpoint, relative to `base_url`
    pub list_path: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
    /// Initial page size
    pub page_limit: u64,
    /// Page sizes offered by the length menu
    pub page_limit_options: Vec<u64>,
    /// Include archived records in fetches
    pub show_inactive: bool,
    /// Endpoint-specific filters sent with every fetch
    pub filters: HashMap<String, String>,
}

impl Default for ListClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            list_path: String::new(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
            page_limit: 10,
            page_limit_options: vec![10, 25, 50, 100],
            show_inactive: false,
            filters: HashMap::new(),
        }
    }
}

impl ListClientConfig {
    /// Create a config for a list endpoint.
    pub fn new(base_url: &str, list_path: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            list_path: list_path.to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Set the initial page size
    pub fn with_page_limit(mut self, limit: u64) -> Self {
        self.page_limit = limit;
        self
    }

    /// Set the page sizes offered by the length menu
    pub fn with_page_limit_options(mut self, options: Vec<u64>) -> Self {
        self.page_limit_options = options;
        self
    }

    /// Include archived records in fetches
    pub fn with_show_inactive(mut self, show_inactive: bool) -> Self {
        self.show_inactive = show_inactive;
        self
    }

    /// Add an endpoint-specific filter sent with every fetch
    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        self.filters.insert(key.to_string(), value.to_string());
        self
    }

    /// Validate the configuration. Called at client construction.
    pub fn validate(&self) -> Result<(), ListClientError> {
        Url::parse(&self.base_url)
            .map_err(|e| ListClientError::InvalidConfig(format!("base_url: {e}")))?;
        if self.list_path.is_empty() {
            return Err(ListClientError::InvalidConfig(
                "list_path must not be empty".to_string(),
            ));
        }
        if self.page_limit == 0 {
            return Err(ListClientError::InvalidConfig(
                "page_limit must be positive".to_string(),
            ));
        }
        if self.page_limit_options.iter().any(|&limit| limit == 0) {
            return Err(ListClientError::InvalidConfig(
                "page_limit_options must be positive".to_string(),
            ));
        }
        if !self.page_limit_options.contains(&self.page_limit) {
            return Err(ListClientError::InvalidConfig(
                "page_limit_options must include page_limit".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ListClientConfig::default();
        assert_eq!(config.connect_timeout_ms, 5000);
        assert_eq!(config.read_timeout_ms, 30000);
        assert_eq!(config.page_limit, 10);
        assert_eq!(config.page_limit_options, vec![10, 25, 50, 100]);
        assert!(!config.show_inactive);
    }

    #[test]
    fn test_config_builder() {
        let config = ListClientConfig::new("http://localhost:8000", "/cases/list")
            .with_timeouts(3000, 15000)
            .with_page_limit(25)
            .with_show_inactive(true)
            .with_filter("domain", "springfield");

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.list_path, "/cases/list");
        assert_eq!(config.connect_timeout_ms, 3000);
        assert_eq!(config.read_timeout_ms, 15000);
        assert_eq!(config.page_limit, 25);
        assert!(config.show_inactive);
        assert_eq!(config.filters["domain"], "springfield");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let config = ListClientConfig::new("not a url", "/cases/list");
        assert!(matches!(
            config.validate(),
            Err(ListClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_empty_list_path() {
        let config = ListClientConfig::new("http://localhost:8000", "");
        assert!(matches!(
            config.validate(),
            Err(ListClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_page_limit() {
        let config =
            ListClientConfig::new("http://localhost:8000", "/cases/list").with_page_limit(0);
        assert!(matches!(
            config.validate(),
            Err(ListClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_requires_limit_in_options() {
        let config =
            ListClientConfig::new("http://localhost:8000", "/cases/list").with_page_limit(7);
        assert!(matches!(
            config.validate(),
            Err(ListClientError::InvalidConfig(_))
        ));
    }
}

//! List endpoint wire models
//!
//! Shapes exchanged with the list fetch and archive action endpoints. Field
//! names are the snake_case names the endpoints put on the wire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a server-backed list, as returned by a list fetch endpoint.
///
/// Records are endpoint-specific; the `Value` default keeps them opaque when
/// no typed row model exists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListPage<T = Value> {
    pub success: bool,
    #[serde(default)]
    pub data_list: Vec<T>,
    pub current_page: u64,
    pub data_list_total: u64,
}

impl<T> ListPage<T> {
    pub fn new(data_list: Vec<T>, current_page: u64, data_list_total: u64) -> Self {
        Self {
            success: true,
            data_list,
            current_page,
            data_list_total,
        }
    }

    pub fn empty() -> Self {
        Self {
            success: true,
            data_list: Vec::new(),
            current_page: 1,
            data_list_total: 0,
        }
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Result of an archive/unarchive action endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Query parameters carried by every list fetch.
///
/// `filters` holds endpoint-specific key/value filters and is flattened into
/// the query string alongside the common parameters.
#[derive(Debug, Serialize)]
pub struct ListQuery<'a> {
    pub page: u64,
    pub limit: u64,
    pub show_inactive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'a str>,
    #[serde(flatten)]
    pub filters: &'a HashMap<String, String>,
}

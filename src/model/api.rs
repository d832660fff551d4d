//! Response envelope shared by every endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Uniform response envelope.
///
/// Successful responses carry `data` and omit `error`; failed responses carry
/// an optional per-field `error` map and omit `data`. The timestamp records
/// when the response was produced.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<HashMap<String, String>>,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    pub fn failure(message: impl Into<String>, error: Option<HashMap<String, String>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error,
            timestamp: Utc::now(),
        }
    }
}

/// One page of results with the paging metadata clients need to render
/// a pager without issuing a count query of their own.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,
    /// Zero-based page index that was requested.
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl<T> PageDto<T> {
    pub fn new(content: Vec<T>, page: u64, size: u64, total_elements: u64, total_pages: u64) -> Self {
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: total_pages == 0 || page + 1 >= total_pages,
        }
    }
}

//! API Response types
//!
//! Every endpoint wraps its payload in the same envelope:
//!
//! ```json
//! { "success": true, "data": { ... } }
//! { "success": false, "message": "why it failed" }
//! ```
//!
//! List endpoints additionally carry `total`, `page` and `pages` at the
//! top level next to `data`.

use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// List responses only: total matching records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// List responses only: 1-indexed page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// List responses only: total page count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            total: None,
            page: None,
            pages: None,
        }
    }

    /// Create a successful paginated response
    pub fn page(data: T, total: u64, page: u32, pages: u32) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            total: Some(total),
            page: Some(page),
            pages: Some(pages),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            total: None,
            page: None,
            pages: None,
        }
    }
}

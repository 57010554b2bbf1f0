//! Product listing query types
//!
//! The listing endpoint filters, sorts and paginates in one pass; these
//! types describe that request and its paged result.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Sort order for product listings, keyed on creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// created_at descending
    #[default]
    Newest,
    /// created_at ascending
    Oldest,
}

/// Query parameters for `GET /api/products`
///
/// `category` supports the sentinel value `"all"` meaning "no filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListParams {
    /// 1-indexed page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Case-insensitive substring match on name, description or category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

/// One page of a product listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// Total records matching the filter, across all pages
    pub total: u64,
    pub page: u32,
    /// ceil(total / limit)
    pub pages: u32,
}

impl ProductPage {
    pub fn new(items: Vec<Product>, total: u64, page: u32, limit: u32) -> Self {
        let pages = if limit > 0 {
            ((total as f64) / (limit as f64)).ceil() as u32
        } else {
            1
        };
        Self {
            items,
            total,
            page,
            pages,
        }
    }
}

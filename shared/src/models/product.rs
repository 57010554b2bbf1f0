//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity as served over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Record ID in `product:key` form
    pub id: String,
    pub name: String,
    /// Denormalized category name (not a record link)
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    pub description: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    pub image_url: String,
    /// Opaque reference into the external asset store
    pub image_file_id: Option<String>,
    /// Unix epoch milliseconds, server-assigned
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

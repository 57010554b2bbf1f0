//! Product Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product record
///
/// `category` is a denormalized copy of a category's name, not a record
/// link. Cascades (see the catalog service) keep it consistent with the
/// category table on a best-effort basis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<RecordId>,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    pub description: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub image_url: String,
    pub image_file_id: Option<String>,
    /// Unix epoch milliseconds, assigned on create
    #[serde(default)]
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every write
    #[serde(default)]
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

impl From<Product> for shared::Product {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.map(|t| t.to_string()).unwrap_or_default(),
            name: p.name,
            category: p.category,
            price: p.price,
            discount_percentage: p.discount_percentage,
            description: p.description,
            in_stock: p.in_stock,
            image_url: p.image_url,
            image_file_id: p.image_file_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub discount_percentage: Option<f64>,
    pub description: String,
    pub in_stock: Option<bool>,
    pub image_url: String,
    pub image_file_id: Option<String>,
}

/// Update product payload, only present fields are written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub description: Option<String>,
    pub in_stock: Option<bool>,
    pub image_url: Option<String>,
    pub image_file_id: Option<String>,
}

//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity as served over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Record ID in `category:key` form
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Payload of a successful category rename
///
/// Both sides of the rename are returned so clients can tell which
/// products were re-pointed without a second request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRename {
    pub before: Category,
    pub after: Category,
}

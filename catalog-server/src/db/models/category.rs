//! Category Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Category record
///
/// Names are intended to be unique but uniqueness is not enforced;
/// products reference categories by name, not by record link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl From<Category> for shared::Category {
    fn from(c: Category) -> Self {
        Self {
            id: c.id.map(|t| t.to_string()).unwrap_or_default(),
            name: c.name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: String,
}

/// Result of a category update
///
/// The rename cascade needs the name as it was before the write, so the
/// repository hands back both sides of the update explicitly.
#[derive(Debug, Clone)]
pub struct CategoryRename {
    pub before: Category,
    pub after: Category,
}

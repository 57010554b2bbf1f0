//! Banner Image Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Banner image record, create/delete only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerImage {
    pub id: Option<RecordId>,
    pub image_url: String,
    pub image_file_id: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl From<BannerImage> for shared::BannerImage {
    fn from(b: BannerImage) -> Self {
        Self {
            id: b.id.map(|t| t.to_string()).unwrap_or_default(),
            image_url: b.image_url,
            image_file_id: b.image_file_id,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Create banner image payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerImageCreate {
    pub image_url: String,
    pub image_file_id: Option<String>,
}

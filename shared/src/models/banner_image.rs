//! Banner Image Model

use serde::{Deserialize, Serialize};

/// Banner image entity as served over the API
///
/// Banner images are create/delete only; there is no update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerImage {
    /// Record ID in `banner_image:key` form
    pub id: String,
    pub image_url: String,
    pub image_file_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

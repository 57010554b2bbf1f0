//! Banner Image Repository

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{BannerImage, BannerImageCreate};
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const BANNER_TABLE: &str = "banner_image";

#[derive(Clone)]
pub struct BannerImageRepository {
    base: BaseRepository,
}

impl BannerImageRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new banner image
    pub async fn create(&self, data: BannerImageCreate) -> RepoResult<BannerImage> {
        if data.image_url.trim().is_empty() {
            return Err(RepoError::Validation("image is required".into()));
        }

        let now = now_millis();
        let banner = BannerImage {
            id: None,
            image_url: data.image_url,
            image_file_id: data.image_file_id,
            created_at: now,
            updated_at: now,
        };

        let created: Option<BannerImage> =
            self.base.db().create(BANNER_TABLE).content(banner).await?;

        created.ok_or_else(|| RepoError::Database("Failed to create banner image".to_string()))
    }

    /// Find all banner images, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<BannerImage>> {
        let banners: Vec<BannerImage> = self
            .base
            .db()
            .query("SELECT * FROM banner_image ORDER BY created_at DESC, id DESC")
            .await?
            .take(0)?;
        Ok(banners)
    }

    /// Delete a banner image, returning the deleted record
    pub async fn delete(&self, id: &str) -> RepoResult<BannerImage> {
        let key = record_key(BANNER_TABLE, id);
        let deleted: Option<BannerImage> = self.base.db().delete((BANNER_TABLE, key)).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Banner image {} not found", id)))
    }
}

//! Asset Store Service
//!
//! Uploads product and banner images to the external media CDN and
//! deletes them when their owning record goes away. Deletion is best
//! effort; a failed remote delete never fails the catalog operation.

use reqwest::Client;
use serde::Deserialize;

use crate::core::config::AssetStoreConfig;
use crate::utils::{AppError, AppResult};

/// Maximum accepted upload size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// A stored asset as reported by the media CDN
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
    #[serde(rename = "fileId")]
    pub file_id: String,
}

#[derive(Clone)]
pub struct AssetStoreService {
    client: Client,
    config: AssetStoreConfig,
}

impl AssetStoreService {
    pub fn new(config: AssetStoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Upload a file buffer, returning its public URL and remote file id
    pub async fn upload(&self, data: Vec<u8>, file_name: &str) -> AppResult<UploadedAsset> {
        if data.is_empty() {
            return Err(AppError::validation("Empty file provided"));
        }
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::validation(format!(
                "File too large. Maximum size is {}MB",
                MAX_FILE_SIZE / 1024 / 1024
            )));
        }

        // Unique remote name so concurrent uploads of the same file never clash
        let remote_name = format!("{}-{}", uuid::Uuid::new_v4(), file_name);

        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(remote_name.clone())
            .mime_str(mime.as_ref())
            .map_err(|e| AppError::internal(format!("Invalid MIME type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("fileName", remote_name)
            .text("folder", self.config.folder.clone());

        let response = self
            .client
            .post(&self.config.upload_url)
            .basic_auth(&self.config.private_key, Some(""))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Asset upload failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::internal(format!(
                "Asset upload rejected ({}): {}",
                status, body
            )));
        }

        let asset: UploadedAsset = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Invalid asset store response: {}", e)))?;

        tracing::info!(file_id = %asset.file_id, name = %file_name, "Asset uploaded");
        Ok(asset)
    }

    /// Delete a remote asset, swallowing failures
    pub async fn delete_best_effort(&self, file_id: &str) {
        if file_id.is_empty() {
            return;
        }

        let url = format!("{}/files/{}", self.config.api_url.trim_end_matches('/'), file_id);
        let result = self
            .client
            .delete(&url)
            .basic_auth(&self.config.private_key, Some(""))
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!(file_id = %file_id, "Asset deleted");
            }
            Ok(resp) => {
                tracing::warn!(file_id = %file_id, status = %resp.status(), "Asset delete rejected");
            }
            Err(e) => {
                tracing::warn!(file_id = %file_id, error = %e, "Asset delete failed");
            }
        }
    }
}

//! Service Layer

pub mod asset_store;
pub mod catalog_service;

pub use asset_store::{AssetStoreService, UploadedAsset};
pub use catalog_service::{CatalogService, ImageUpload, UNCATEGORIZED};

//! Catalog Service - Product, Category and Banner management
//!
//! Orchestrates the repositories and the asset store. Handlers never
//! touch the repositories directly; everything goes through here so
//! cascades and image cleanup stay in one place.

use std::collections::BTreeMap;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::config::CategoryDeleteScope;
use crate::db::models::{
    BannerImageCreate, CategoryCreate, CategoryUpdate, ProductCreate, ProductUpdate,
};
use crate::db::repository::product::ProductPageQuery;
use crate::db::repository::{BannerImageRepository, CategoryRepository, ProductRepository};
use crate::services::AssetStoreService;
use crate::utils::{AppError, AppResult};
use shared::{CategoryRename, ProductListParams, ProductPage};

/// Fallback category for products whose category is deleted
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Default page size when the client does not send one
const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Cap on the per-category product strips shown on the storefront home
const CATEGORY_STRIP_LIMIT: usize = 8;

/// A file received from a multipart upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub data: Vec<u8>,
    pub file_name: String,
}

#[derive(Clone)]
pub struct CatalogService {
    products: ProductRepository,
    categories: CategoryRepository,
    banners: BannerImageRepository,
    assets: AssetStoreService,
    delete_scope: CategoryDeleteScope,
}

impl CatalogService {
    pub fn new(db: Surreal<Db>, assets: AssetStoreService, delete_scope: CategoryDeleteScope) -> Self {
        Self {
            products: ProductRepository::new(db.clone()),
            categories: CategoryRepository::new(db.clone()),
            banners: BannerImageRepository::new(db),
            assets,
            delete_scope,
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// One page of products with search, category filter and sort applied
    pub async fn list_products(&self, params: &ProductListParams) -> AppResult<ProductPage> {
        let page = params.page.unwrap_or(1).max(1);
        let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(1);

        let query = ProductPageQuery {
            page,
            limit,
            search: params.search.clone(),
            category: params.category.clone(),
            sort: params.sort.unwrap_or_default(),
        };

        let items = self.products.find_page(&query).await?;
        let total = self.products.count(&query).await?;

        Ok(ProductPage::new(
            items.into_iter().map(Into::into).collect(),
            total,
            page,
            limit,
        ))
    }

    pub async fn get_product(&self, id: &str) -> AppResult<shared::Product> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;
        Ok(product.into())
    }

    /// Products grouped by category name for the storefront home page,
    /// newest first, at most eight per category
    pub async fn products_by_category(
        &self,
    ) -> AppResult<BTreeMap<String, Vec<shared::Product>>> {
        let products = self.products.find_all().await?;

        let mut grouped: BTreeMap<String, Vec<shared::Product>> = BTreeMap::new();
        for product in products {
            let strip = grouped.entry(product.category.clone()).or_default();
            if strip.len() < CATEGORY_STRIP_LIMIT {
                strip.push(product.into());
            }
        }
        Ok(grouped)
    }

    /// Create a product, uploading its image first when one is attached
    ///
    /// If the database write fails after the upload succeeded, the
    /// uploaded asset is removed again so nothing leaks on the CDN.
    pub async fn create_product(
        &self,
        mut data: ProductCreate,
        image: Option<ImageUpload>,
    ) -> AppResult<shared::Product> {
        let mut uploaded_file_id = None;
        if let Some(img) = image {
            let asset = self.assets.upload(img.data, &img.file_name).await?;
            uploaded_file_id = Some(asset.file_id.clone());
            data.image_url = asset.url;
            data.image_file_id = Some(asset.file_id);
        }

        match self.products.create(data).await {
            Ok(product) => {
                tracing::info!(name = %product.name, "Product created");
                Ok(product.into())
            }
            Err(e) => {
                if let Some(file_id) = uploaded_file_id {
                    self.assets.delete_best_effort(&file_id).await;
                }
                Err(e.into())
            }
        }
    }

    /// Update a product; a new image replaces the old one on the CDN
    pub async fn update_product(
        &self,
        id: &str,
        mut data: ProductUpdate,
        image: Option<ImageUpload>,
    ) -> AppResult<shared::Product> {
        let existing = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {} not found", id)))?;

        let mut uploaded_file_id = None;
        if let Some(img) = image {
            let asset = self.assets.upload(img.data, &img.file_name).await?;
            uploaded_file_id = Some(asset.file_id.clone());
            data.image_url = Some(asset.url);
            data.image_file_id = Some(asset.file_id);
        }

        match self.products.update(id, data).await {
            Ok(product) => {
                // The old image is orphaned once the new one is in place
                if uploaded_file_id.is_some()
                    && let Some(old_file_id) = existing.image_file_id.as_deref()
                {
                    self.assets.delete_best_effort(old_file_id).await;
                }
                Ok(product.into())
            }
            Err(e) => {
                if let Some(file_id) = uploaded_file_id {
                    self.assets.delete_best_effort(&file_id).await;
                }
                Err(e.into())
            }
        }
    }

    /// Delete a product and its CDN image
    pub async fn delete_product(&self, id: &str) -> AppResult<shared::Product> {
        let deleted = self.products.delete(id).await?;
        if let Some(file_id) = deleted.image_file_id.as_deref() {
            self.assets.delete_best_effort(file_id).await;
        }
        tracing::info!(name = %deleted.name, "Product deleted");
        Ok(deleted.into())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub async fn list_categories(&self) -> AppResult<Vec<shared::Category>> {
        let categories = self.categories.find_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category(&self, id: &str) -> AppResult<shared::Category> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {} not found", id)))?;
        Ok(category.into())
    }

    pub async fn create_category(&self, data: CategoryCreate) -> AppResult<shared::Category> {
        let category = self.categories.create(data).await?;
        tracing::info!(name = %category.name, "Category created");
        Ok(category.into())
    }

    /// Rename a category and cascade the new name into every product
    /// that referenced the old one
    pub async fn rename_category(
        &self,
        id: &str,
        data: CategoryUpdate,
    ) -> AppResult<CategoryRename> {
        let rename = self.categories.update(id, data).await?;

        if rename.before.name != rename.after.name {
            self.products
                .rename_category_refs(&rename.before.name, &rename.after.name)
                .await?;
            tracing::info!(
                from = %rename.before.name,
                to = %rename.after.name,
                "Category renamed, product references updated"
            );
        }

        Ok(CategoryRename {
            before: rename.before.into(),
            after: rename.after.into(),
        })
    }

    /// Delete a category and move its products to "Uncategorized"
    ///
    /// Each affected product is rewritten individually so its
    /// `updated_at` reflects the reassignment. With
    /// [`CategoryDeleteScope::All`] every product is rewritten, matching
    /// deployments that relied on the old blanket behavior.
    pub async fn delete_category(&self, id: &str) -> AppResult<shared::Category> {
        let deleted = self.categories.delete(id).await?;

        let affected = match self.delete_scope {
            CategoryDeleteScope::Affected => {
                self.products.find_all_by_category(&deleted.name).await?
            }
            CategoryDeleteScope::All => self.products.find_all().await?,
        };

        let mut moved = 0usize;
        for product in affected {
            let Some(record) = product.id.as_ref() else {
                continue;
            };
            let update = ProductUpdate {
                category: Some(UNCATEGORIZED.to_string()),
                ..Default::default()
            };
            self.products.update(&record.to_string(), update).await?;
            moved += 1;
        }

        tracing::info!(name = %deleted.name, moved, "Category deleted");
        Ok(deleted.into())
    }

    // =========================================================================
    // Banner images
    // =========================================================================

    pub async fn list_banners(&self) -> AppResult<Vec<shared::BannerImage>> {
        let banners = self.banners.find_all().await?;
        Ok(banners.into_iter().map(Into::into).collect())
    }

    /// Upload a banner image and record it
    pub async fn create_banner(&self, image: ImageUpload) -> AppResult<shared::BannerImage> {
        let asset = self.assets.upload(image.data, &image.file_name).await?;
        let data = BannerImageCreate {
            image_url: asset.url,
            image_file_id: Some(asset.file_id.clone()),
        };

        match self.banners.create(data).await {
            Ok(banner) => Ok(banner.into()),
            Err(e) => {
                self.assets.delete_best_effort(&asset.file_id).await;
                Err(e.into())
            }
        }
    }

    /// Delete a banner image and its CDN file
    pub async fn delete_banner(&self, id: &str) -> AppResult<shared::BannerImage> {
        let deleted = self.banners.delete(id).await?;
        if let Some(file_id) = deleted.image_file_id.as_deref() {
            self.assets.delete_best_effort(file_id).await;
        }
        Ok(deleted.into())
    }
}

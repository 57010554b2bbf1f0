//! HTTP client for the catalog API

use std::collections::BTreeMap;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::{ApiResponse, BannerImage, Category, CategoryRename, Product, ProductListParams, ProductPage};

/// New product fields sent alongside the image file
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub discount_percentage: Option<f64>,
    pub description: String,
    pub in_stock: Option<bool>,
}

/// Changed product fields; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub description: Option<String>,
    pub in_stock: Option<bool>,
}

/// An image file to attach to a multipart request
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub data: Vec<u8>,
    pub file_name: String,
}

impl ImageFile {
    fn into_part(self) -> ClientResult<reqwest::multipart::Part> {
        let mime = mime_guess::from_path(&self.file_name).first_or_octet_stream();
        reqwest::multipart::Part::bytes(self.data)
            .file_name(self.file_name)
            .mime_str(mime.as_ref())
            .map_err(|e| ClientError::Internal(format!("Invalid MIME type: {}", e)))
    }
}

/// HTTP client for making requests to the catalog server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Handle the HTTP response, unwrapping the standard envelope
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiResponse<()>>(&text)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or(text);
            tracing::debug!(%status, %message, "Request rejected");
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<ApiResponse<T>> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    fn unwrap_data<T>(response: ApiResponse<T>) -> ClientResult<T> {
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing data field".to_string()))
    }

    // ========== Products ==========

    /// One page of products with filters applied
    pub async fn list_products(&self, params: &ProductListParams) -> ClientResult<ProductPage> {
        let response = self
            .client
            .get(self.url("/api/products"))
            .query(params)
            .send()
            .await?;
        let envelope: ApiResponse<Vec<Product>> = Self::handle_response(response).await?;

        let total = envelope.total.unwrap_or(0);
        let page = envelope.page.unwrap_or(1);
        let pages = envelope.pages.unwrap_or(0);
        let items = Self::unwrap_data(envelope)?;

        Ok(ProductPage {
            items,
            total,
            page,
            pages,
        })
    }

    pub async fn product(&self, id: &str) -> ClientResult<Product> {
        Self::unwrap_data(self.get(&format!("/api/products/{}", id)).await?)
    }

    /// Products grouped by category, at most eight per category
    pub async fn products_by_category(
        &self,
    ) -> ClientResult<BTreeMap<String, Vec<Product>>> {
        Self::unwrap_data(self.get("/api/products-by-category").await?)
    }

    /// Create a product; the image travels in the same multipart request
    pub async fn create_product(
        &self,
        product: NewProduct,
        image: ImageFile,
    ) -> ClientResult<Product> {
        let mut form = reqwest::multipart::Form::new()
            .text("name", product.name)
            .text("category", product.category)
            .text("price", product.price.to_string())
            .text("description", product.description)
            .part("image", image.into_part()?);
        if let Some(d) = product.discount_percentage {
            form = form.text("discountPercentage", d.to_string());
        }
        if let Some(s) = product.in_stock {
            form = form.text("inStock", s.to_string());
        }

        let response = self
            .client
            .post(self.url("/api/products"))
            .multipart(form)
            .send()
            .await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    /// Update a product; only the provided fields change
    pub async fn update_product(
        &self,
        id: &str,
        changes: ProductChanges,
        image: Option<ImageFile>,
    ) -> ClientResult<Product> {
        let mut form = reqwest::multipart::Form::new();
        if let Some(v) = changes.name {
            form = form.text("name", v);
        }
        if let Some(v) = changes.category {
            form = form.text("category", v);
        }
        if let Some(v) = changes.price {
            form = form.text("price", v.to_string());
        }
        if let Some(v) = changes.discount_percentage {
            form = form.text("discountPercentage", v.to_string());
        }
        if let Some(v) = changes.description {
            form = form.text("description", v);
        }
        if let Some(v) = changes.in_stock {
            form = form.text("inStock", v.to_string());
        }
        if let Some(image) = image {
            form = form.part("image", image.into_part()?);
        }

        let response = self
            .client
            .put(self.url(&format!("/api/products/{}", id)))
            .multipart(form)
            .send()
            .await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    pub async fn delete_product(&self, id: &str) -> ClientResult<Product> {
        let response = self
            .client
            .delete(self.url(&format!("/api/products/{}", id)))
            .send()
            .await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    // ========== Categories ==========

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        Self::unwrap_data(self.get("/api/categories").await?)
    }

    pub async fn create_category(&self, name: &str) -> ClientResult<Category> {
        let response = self
            .client
            .post(self.url("/api/categories"))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    /// Rename a category; the server cascades the rename into products
    pub async fn rename_category(&self, id: &str, name: &str) -> ClientResult<CategoryRename> {
        let response = self
            .client
            .put(self.url(&format!("/api/categories/{}", id)))
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<Category> {
        let response = self
            .client
            .delete(self.url(&format!("/api/categories/{}", id)))
            .send()
            .await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    // ========== Banner images ==========

    pub async fn banner_images(&self) -> ClientResult<Vec<BannerImage>> {
        Self::unwrap_data(self.get("/api/banner-images").await?)
    }

    pub async fn create_banner_image(&self, image: ImageFile) -> ClientResult<BannerImage> {
        let form = reqwest::multipart::Form::new().part("image", image.into_part()?);
        let response = self
            .client
            .post(self.url("/api/banner-images"))
            .multipart(form)
            .send()
            .await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }

    pub async fn delete_banner_image(&self, id: &str) -> ClientResult<BannerImage> {
        let response = self
            .client
            .delete(self.url(&format!("/api/banner-images/{}", id)))
            .send()
            .await?;
        Self::unwrap_data(Self::handle_response(response).await?)
    }
}

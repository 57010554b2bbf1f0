//! Product API Handlers
//!
//! Create and update accept `multipart/form-data` so the image file can
//! travel with the text fields. Field names are camelCase to match the
//! wire models.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{ProductCreate, ProductUpdate};
use crate::services::ImageUpload;
use crate::utils::{AppError, AppResult};
use shared::{ApiResponse, Product, ProductListParams};

/// Parsed multipart form for create/update
#[derive(Default)]
struct ProductForm {
    name: Option<String>,
    category: Option<String>,
    price: Option<f64>,
    discount_percentage: Option<f64>,
    description: Option<String>,
    in_stock: Option<bool>,
    image: Option<ImageUpload>,
}

async fn parse_product_form(mut multipart: Multipart) -> AppResult<ProductForm> {
    let mut form = ProductForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };

        match name.as_str() {
            "image" => {
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "upload".to_string());
                let data = field.bytes().await?.to_vec();
                form.image = Some(ImageUpload { data, file_name });
            }
            "name" => form.name = Some(field.text().await?),
            "category" => form.category = Some(field.text().await?),
            "description" => form.description = Some(field.text().await?),
            "price" => {
                let text = field.text().await?;
                let price = text
                    .trim()
                    .parse()
                    .map_err(|_| AppError::validation(format!("Invalid price: {}", text)))?;
                form.price = Some(price);
            }
            "discountPercentage" => {
                let text = field.text().await?;
                let value = text.trim().parse().map_err(|_| {
                    AppError::validation(format!("Invalid discount percentage: {}", text))
                })?;
                form.discount_percentage = Some(value);
            }
            "inStock" => {
                let text = field.text().await?;
                let value = text.trim().parse().map_err(|_| {
                    AppError::validation(format!("Invalid inStock value: {}", text))
                })?;
                form.in_stock = Some(value);
            }
            // Unknown fields are ignored, matching lenient form clients
            _ => {}
        }
    }

    Ok(form)
}

/// GET /api/products - paged product listing
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let page = state.catalog.list_products(&params).await?;
    Ok(Json(ApiResponse::page(
        page.items, page.total, page.page, page.pages,
    )))
}

/// GET /api/products/:id - single product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.catalog.get_product(&id).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// GET /api/products-by-category - grouped strips for the home page
pub async fn by_category(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<BTreeMap<String, Vec<Product>>>>> {
    let grouped = state.catalog.products_by_category().await?;
    Ok(Json(ApiResponse::ok(grouped)))
}

/// POST /api/products - create product (multipart)
pub async fn create(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let form = parse_product_form(multipart).await?;

    let data = ProductCreate {
        name: form.name.unwrap_or_default(),
        category: form.category.unwrap_or_default(),
        price: form.price.unwrap_or_default(),
        discount_percentage: form.discount_percentage,
        description: form.description.unwrap_or_default(),
        in_stock: form.in_stock,
        image_url: String::new(),
        image_file_id: None,
    };

    let image = form
        .image
        .ok_or_else(|| AppError::validation("Image file is required"))?;

    let product = state.catalog.create_product(data, Some(image)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(product))))
}

/// PUT /api/products/:id - update product (multipart, fields optional)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<ApiResponse<Product>>> {
    let form = parse_product_form(multipart).await?;

    let data = ProductUpdate {
        name: form.name,
        category: form.category,
        price: form.price,
        discount_percentage: form.discount_percentage,
        description: form.description,
        in_stock: form.in_stock,
        image_url: None,
        image_file_id: None,
    };

    let product = state.catalog.update_product(&id, data, form.image).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// DELETE /api/products/:id - delete product and its image
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.catalog.delete_product(&id).await?;
    Ok(Json(ApiResponse::ok(product)))
}

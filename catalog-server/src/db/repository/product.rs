//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::utils::now_millis;
use shared::SortOrder;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "product";

/// Resolved listing query, page/limit already defaulted by the caller
#[derive(Debug, Clone)]
pub struct ProductPageQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortOrder,
}

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn validate_create(data: &ProductCreate) -> RepoResult<()> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("name cannot be empty".into()));
        }
        if data.category.trim().is_empty() {
            return Err(RepoError::Validation("category cannot be empty".into()));
        }
        if data.description.trim().is_empty() {
            return Err(RepoError::Validation("description cannot be empty".into()));
        }
        if data.image_url.trim().is_empty() {
            return Err(RepoError::Validation("image is required".into()));
        }
        if data.price <= 0.0 {
            return Err(RepoError::Validation("price must be positive".into()));
        }
        if let Some(d) = data.discount_percentage {
            if !(0.0..=100.0).contains(&d) {
                return Err(RepoError::Validation(
                    "discount percentage must be between 0 and 100".into(),
                ));
            }
        }
        Ok(())
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        Self::validate_create(&data)?;

        let now = now_millis();
        let product = Product {
            id: None,
            name: data.name,
            category: data.category,
            price: data.price,
            discount_percentage: data.discount_percentage.unwrap_or(0.0),
            description: data.description,
            in_stock: data.in_stock.unwrap_or(true),
            image_url: data.image_url,
            image_file_id: data.image_file_id,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Product> = self.base.db().create(PRODUCT_TABLE).content(product).await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let key = record_key(PRODUCT_TABLE, id);
        let product: Option<Product> = self.base.db().select((PRODUCT_TABLE, key)).await?;
        Ok(product)
    }

    /// Find all products, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// One page of products matching the query
    ///
    /// Search is a case-insensitive substring match over name, description
    /// and category. Category is an exact match. Sort is by creation time
    /// with record id as a tiebreak so page boundaries stay stable.
    pub async fn find_page(&self, query: &ProductPageQuery) -> RepoResult<Vec<Product>> {
        let (where_clause, needle, category) = Self::filter_clause(query);
        let direction = match query.sort {
            SortOrder::Newest => "DESC",
            SortOrder::Oldest => "ASC",
        };
        let start = (query.page.saturating_sub(1) as i64) * query.limit as i64;

        let sql = format!(
            "SELECT * FROM product{where_clause} ORDER BY created_at {direction}, id {direction} LIMIT $limit START $start"
        );

        let mut q = self
            .base
            .db()
            .query(sql)
            .bind(("limit", query.limit as i64))
            .bind(("start", start));
        if let Some(n) = needle {
            q = q.bind(("needle", n));
        }
        if let Some(c) = category {
            q = q.bind(("category", c));
        }

        let products: Vec<Product> = q.await?.take(0)?;
        Ok(products)
    }

    /// Total number of products matching the query's filters
    pub async fn count(&self, query: &ProductPageQuery) -> RepoResult<u64> {
        let (where_clause, needle, category) = Self::filter_clause(query);
        let sql = format!("SELECT count() FROM product{where_clause} GROUP ALL");

        let mut q = self.base.db().query(sql);
        if let Some(n) = needle {
            q = q.bind(("needle", n));
        }
        if let Some(c) = category {
            q = q.bind(("category", c));
        }

        let count: Option<i64> = q.await?.take((0, "count"))?;
        Ok(count.unwrap_or(0) as u64)
    }

    /// Build the shared WHERE clause and its bindings for find_page/count
    fn filter_clause(query: &ProductPageQuery) -> (String, Option<String>, Option<String>) {
        let mut conditions: Vec<&str> = Vec::new();
        let mut needle = None;
        let mut category = None;

        if let Some(search) = query.search.as_deref() {
            let search = search.trim();
            if !search.is_empty() {
                conditions.push(
                    "(string::contains(string::lowercase(name), $needle) \
                     OR string::contains(string::lowercase(description), $needle) \
                     OR string::contains(string::lowercase(category), $needle))",
                );
                needle = Some(search.to_lowercase());
            }
        }

        if let Some(cat) = query.category.as_deref() {
            // "all" is the no-filter sentinel
            if !cat.is_empty() && !cat.eq_ignore_ascii_case("all") {
                conditions.push("category = $category");
                category = Some(cat.to_string());
            }
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        (clause, needle, category)
    }

    /// All products in a category (exact name match), newest first
    pub async fn find_all_by_category(&self, category: &str) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE category = $category ORDER BY created_at DESC, id DESC")
            .bind(("category", category.to_string()))
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Update a product
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let key = record_key(PRODUCT_TABLE, id);

        if let Some(name) = data.name.as_deref() {
            if name.trim().is_empty() {
                return Err(RepoError::Validation("name cannot be empty".into()));
            }
        }
        if let Some(category) = data.category.as_deref() {
            if category.trim().is_empty() {
                return Err(RepoError::Validation("category cannot be empty".into()));
            }
        }
        if let Some(price) = data.price {
            if price <= 0.0 {
                return Err(RepoError::Validation("price must be positive".into()));
            }
        }
        if let Some(d) = data.discount_percentage {
            if !(0.0..=100.0).contains(&d) {
                return Err(RepoError::Validation(
                    "discount percentage must be between 0 and 100".into(),
                ));
            }
        }

        // Build dynamic SET clauses with proper type bindings
        let mut set_parts: Vec<&str> = vec!["updated_at = $updated_at"];

        if data.name.is_some() { set_parts.push("name = $name"); }
        if data.category.is_some() { set_parts.push("category = $category"); }
        if data.price.is_some() { set_parts.push("price = $price"); }
        if data.discount_percentage.is_some() { set_parts.push("discount_percentage = $discount_percentage"); }
        if data.description.is_some() { set_parts.push("description = $description"); }
        if data.in_stock.is_some() { set_parts.push("in_stock = $in_stock"); }
        if data.image_url.is_some() { set_parts.push("image_url = $image_url"); }
        if data.image_file_id.is_some() { set_parts.push("image_file_id = $image_file_id"); }

        let record = surrealdb::RecordId::from_table_key(PRODUCT_TABLE, key);
        let query_str = format!("UPDATE $record SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(query_str)
            .bind(("record", record))
            .bind(("updated_at", now_millis()));

        if let Some(v) = data.name { query = query.bind(("name", v)); }
        if let Some(v) = data.category { query = query.bind(("category", v)); }
        if let Some(v) = data.price { query = query.bind(("price", v)); }
        if let Some(v) = data.discount_percentage { query = query.bind(("discount_percentage", v)); }
        if let Some(v) = data.description { query = query.bind(("description", v)); }
        if let Some(v) = data.in_stock { query = query.bind(("in_stock", v)); }
        if let Some(v) = data.image_url { query = query.bind(("image_url", v)); }
        if let Some(v) = data.image_file_id { query = query.bind(("image_file_id", v)); }

        let products: Vec<Product> = query.await?.take(0)?;
        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Delete a product, returning the deleted record
    pub async fn delete(&self, id: &str) -> RepoResult<Product> {
        let key = record_key(PRODUCT_TABLE, id);
        let deleted: Option<Product> = self.base.db().delete((PRODUCT_TABLE, key)).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Point every product in `old` at `new` in one statement
    pub async fn rename_category_refs(&self, old: &str, new: &str) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE product SET category = $new, updated_at = $updated_at WHERE category = $old")
            .bind(("old", old.to_string()))
            .bind(("new", new.to_string()))
            .bind(("updated_at", now_millis()))
            .await?;
        Ok(())
    }
}

//! Category Repository

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{Category, CategoryCreate, CategoryRename, CategoryUpdate};
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CATEGORY_TABLE: &str = "category";

// =============================================================================
// Category Repository
// =============================================================================

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new category
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("name cannot be empty".into()));
        }

        let now = now_millis();
        let category = Category {
            id: None,
            name: data.name,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Category> = self
            .base
            .db()
            .create(CATEGORY_TABLE)
            .content(category)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// Find category by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let key = record_key(CATEGORY_TABLE, id);
        let category: Option<Category> = self.base.db().select((CATEGORY_TABLE, key)).await?;
        Ok(category)
    }

    /// Find all categories, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY created_at DESC, id DESC")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Rename a category, returning the record before and after the write
    ///
    /// The caller needs the old name to cascade the rename into products.
    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<CategoryRename> {
        if data.name.trim().is_empty() {
            return Err(RepoError::Validation("name cannot be empty".into()));
        }

        let key = record_key(CATEGORY_TABLE, id);
        let before = self
            .find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

        let record = surrealdb::RecordId::from_table_key(CATEGORY_TABLE, key);
        let categories: Vec<Category> = self
            .base
            .db()
            .query("UPDATE $record SET name = $name, updated_at = $updated_at RETURN AFTER")
            .bind(("record", record))
            .bind(("name", data.name))
            .bind(("updated_at", now_millis()))
            .await?
            .take(0)?;

        let after = categories
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

        Ok(CategoryRename { before, after })
    }

    /// Delete a category, returning the deleted record
    pub async fn delete(&self, id: &str) -> RepoResult<Category> {
        let key = record_key(CATEGORY_TABLE, id);
        let deleted: Option<Category> = self.base.db().delete((CATEGORY_TABLE, key)).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }
}
